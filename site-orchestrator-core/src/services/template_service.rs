//! Template catalog service
//!
//! Exposes the static template catalog (stateless service)

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::TemplateCatalog;
use crate::types::Template;

/// Template catalog service
pub struct TemplateService {
    catalog: Arc<dyn TemplateCatalog>,
}

impl TemplateService {
    /// Create template service instance
    #[must_use]
    pub fn new(catalog: Arc<dyn TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// Get a list of all available templates
    pub fn list_templates(&self) -> Vec<Template> {
        self.catalog.list()
    }

    /// Get a single template
    pub fn get_template(&self, id: &str) -> CoreResult<Template> {
        self.catalog
            .get(id)
            .ok_or_else(|| CoreError::UnknownTemplate(id.to_string()))
    }
}
