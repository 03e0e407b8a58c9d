//! Website provisioning service
//!
//! Realizes a "create website" request: template lookup -> subdomain
//! validation -> name validation -> insert. Nothing is written until every
//! check has passed, so a failed request leaves the collection unchanged.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{clean_name, ServiceContext};
use crate::types::{CreateWebsiteRequest, Website, WebsiteStatus};
use crate::utils::subdomain::{normalize_subdomain, validate_subdomain};

/// Website provisioning service
pub struct ProvisioningService {
    ctx: Arc<ServiceContext>,
}

impl ProvisioningService {
    /// Create a provisioning service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Create a website in the `Building` state
    pub async fn create_website(&self, request: CreateWebsiteRequest) -> CoreResult<Website> {
        let result = self.provision(request).await;
        match &result {
            Ok(website) => log::info!(
                "Website {} provisioned: {} (template {})",
                website.id,
                website.subdomain,
                website.template_id
            ),
            Err(e) => e.log("Website provisioning"),
        }
        result
    }

    async fn provision(&self, request: CreateWebsiteRequest) -> CoreResult<Website> {
        let _guard = self.ctx.lock_mutations().await;

        // 1. Resolve template
        let template = self
            .ctx
            .template_catalog
            .get(&request.template_id)
            .ok_or_else(|| CoreError::UnknownTemplate(request.template_id.clone()))?;

        // 2. Validate subdomain against the current index
        let taken = self.ctx.website_repository.subdomains().await?;
        validate_subdomain(&request.subdomain, taken.iter().map(String::as_str))
            .map_err(CoreError::InvalidSubdomain)?;

        // 3. Validate name
        let name = clean_name(&request.name)?;

        // 4. Build and insert
        let now = self.ctx.clock.now();
        let website = Website {
            id: self.ctx.id_generator.next_id(),
            name,
            subdomain: normalize_subdomain(&request.subdomain),
            domain: None,
            template_id: template.id,
            status: WebsiteStatus::INITIAL,
            owner: request.owner,
            description: request
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            created_at: now,
            updated_at: now,
            visitor_count: 0,
        };

        log::debug!("Inserting website {} ({})", website.id, website.subdomain);
        self.ctx.website_repository.insert(&website).await?;

        Ok(website)
    }
}
