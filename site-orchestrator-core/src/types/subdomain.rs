//! Subdomain rejection reasons

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a subdomain candidate was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubdomainRejection {
    /// Candidate is empty
    Empty,
    /// Contains characters outside `[a-z0-9-]` or starts/ends with a hyphen
    BadCharacters,
    /// Longer than a DNS label allows
    TooLong,
    /// Already used by another website (case-insensitive)
    AlreadyTaken,
}

impl fmt::Display for SubdomainRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Empty => "empty",
            Self::BadCharacters => "bad characters",
            Self::TooLong => "too long",
            Self::AlreadyTaken => "already taken",
        };
        f.write_str(tag)
    }
}
