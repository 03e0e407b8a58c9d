//! Application configuration
//!
//! Loaded from a TOML file; every field has a default, so an empty or
//! missing file yields a working configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use site_orchestrator_core::error::{CoreError, CoreResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub hosting: HostingConfig,
    pub logging: LoggingConfig,
}

/// Hosting platform settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Domain under which every subdomain is served, e.g. `cms.com`
    pub base_domain: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            base_domain: "cms.com".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    pub level: String,
    /// Colored output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: false,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CoreError::ConfigError(format!("Invalid configuration: {e}")))?;
        config.validated()
    }

    /// Normalize the base domain, rejecting a blank one
    pub fn validated(mut self) -> CoreResult<Self> {
        let base = self
            .hosting
            .base_domain
            .trim()
            .trim_matches('.')
            .to_lowercase();
        if base.is_empty() {
            return Err(CoreError::ConfigError(
                "hosting.base_domain cannot be empty".to_string(),
            ));
        }
        self.hosting.base_domain = base;
        Ok(self)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
