//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::SubdomainRejection;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Template not found in the catalog
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Subdomain rejected by the validator
    #[error("Invalid subdomain: {0}")]
    InvalidSubdomain(SubdomainRejection),

    /// Empty display name
    #[error("Website name cannot be empty")]
    InvalidName,

    /// Website not found
    #[error("Website not found: {0}")]
    WebsiteNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnknownTemplate(_)
            | Self::InvalidSubdomain(_)
            | Self::InvalidName
            | Self::WebsiteNotFound(_)
            | Self::ValidationError(_) => true,
            Self::StorageError(_) | Self::ConfigError(_) => false,
        }
    }

    /// Log this error at the level picked by [`Self::is_expected`].
    pub(crate) fn log(&self, operation: &str) {
        if self.is_expected() {
            log::warn!("{operation} rejected: {self}");
        } else {
            log::error!("{operation} failed: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
