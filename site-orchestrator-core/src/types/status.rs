//! Website lifecycle status and its transition rules

use serde::{Deserialize, Serialize};

/// Website status
///
/// Transitions driven by the operator toggle:
///
/// | from        | to          |
/// |-------------|-------------|
/// | `Building`  | `Active`    |
/// | `Active`    | `Suspended` |
/// | `Suspended` | `Active`    |
///
/// Only provisioning produces `Building`; no toggle ever returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsiteStatus {
    /// Provisioned, not yet activated
    Building,
    /// Serving traffic
    Active,
    /// Paused by the operator
    Suspended,
}

impl WebsiteStatus {
    /// Status assigned at provisioning time
    pub const INITIAL: Self = Self::Building;

    /// Apply the pause/play toggle.
    ///
    /// A toggle on `Building` finishes the build and activates the site.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Building | Self::Suspended => Self::Active,
            Self::Active => Self::Suspended,
        }
    }

    /// Whether the site is currently serving
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Active)
    }
}
