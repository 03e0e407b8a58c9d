//! Site template type definitions

use serde::{Deserialize, Serialize};

/// Site template (catalog-defined, immutable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Stable slug identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Capability tags, in display order
    pub features: Vec<String>,
}

impl Template {
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str, features: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(ToString::to_string).collect(),
        }
    }
}
