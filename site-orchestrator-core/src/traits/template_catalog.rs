//! Template catalog abstract Trait

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Template;

/// Template Catalog Trait
///
/// Read-only registry of site templates, fixed for the lifetime of the process.
/// Provides a default static implementation of `StaticTemplateCatalog`.
pub trait TemplateCatalog: Send + Sync {
    /// All templates in catalog definition order
    fn list(&self) -> Vec<Template>;

    /// Get template based on ID
    ///
    /// # Arguments
    /// * `id` - Template slug
    fn get(&self, id: &str) -> Option<Template>;
}

/// Static template catalog
///
/// Default implementation, available on all platforms.
#[derive(Debug, Clone)]
pub struct StaticTemplateCatalog {
    templates: Vec<Template>,
}

impl StaticTemplateCatalog {
    /// Catalog shipped with the platform
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Template::new(
                    "blog",
                    "Blog & Portfolio",
                    "Perfect for personal blogs and portfolios",
                    &["Responsive Design", "SEO Optimized", "Comment System"],
                ),
                Template::new(
                    "business",
                    "Business Website",
                    "Professional business presence",
                    &["Contact Forms", "Service Pages", "Team Showcase"],
                ),
                Template::new(
                    "ecommerce",
                    "E-commerce Store",
                    "Online store with payment integration",
                    &["Product Catalog", "Payment Gateway", "Inventory Management"],
                ),
                Template::new(
                    "portfolio",
                    "Creative Portfolio",
                    "Showcase your creative work",
                    &["Gallery Views", "Project Showcase", "Client Testimonials"],
                ),
                Template::new(
                    "event",
                    "Event Website",
                    "Event management and promotion",
                    &["Event Calendar", "Registration Forms", "Speaker Profiles"],
                ),
                Template::new(
                    "custom",
                    "Custom Build",
                    "Start from scratch with custom code",
                    &["Full Customization", "Custom Components", "Advanced Features"],
                ),
            ],
        }
    }

    /// Build a fixed catalog from an explicit list
    ///
    /// Rejects duplicate template ids.
    pub fn from_templates(templates: Vec<Template>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate template id: {}",
                    template.id
                )));
            }
        }
        Ok(Self { templates })
    }
}

impl Default for StaticTemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog for StaticTemplateCatalog {
    fn list(&self) -> Vec<Template> {
        self.templates.clone()
    }

    fn get(&self, id: &str) -> Option<Template> {
        self.templates.iter().find(|t| t.id == id).cloned()
    }
}
