//! Website store service
//!
//! Field updates, lifecycle toggles, visitor accounting and deletion of
//! existing websites. Every mutation runs under the context's mutation lock:
//! read -> compute -> write, with `updated_at` advanced on each write.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{clean_name, ServiceContext};
use crate::types::{BatchDeleteFailure, BatchDeleteResult, UpdateWebsiteRequest, Website};

/// Website store service
pub struct WebsiteService {
    ctx: Arc<ServiceContext>,
}

impl WebsiteService {
    /// Create a website service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    // ===== 查询 =====

    /// List all websites in insertion order
    pub async fn list_websites(&self) -> CoreResult<Vec<Website>> {
        self.ctx.website_repository.find_all().await
    }

    /// Get website based on ID
    pub async fn get_website(&self, id: &str) -> CoreResult<Website> {
        self.ctx.require_website(id).await
    }

    // ===== 变更 =====

    /// Update the display name and/or the custom domain mapping
    pub async fn update_website(
        &self,
        id: &str,
        request: UpdateWebsiteRequest,
    ) -> CoreResult<Website> {
        let result = self.apply_update(id, request).await;
        match &result {
            Ok(_) => log::info!("Website {id} updated"),
            Err(e) => e.log("Website update"),
        }
        result
    }

    /// Apply the pause/play toggle and return the updated website
    ///
    /// `Building -> Active`, `Active -> Suspended`, `Suspended -> Active`.
    pub async fn toggle_status(&self, id: &str) -> CoreResult<Website> {
        let result = self.apply_toggle(id).await;
        match &result {
            Ok(website) => {
                log::info!("Website {id} status changed to {:?}", website.status);
            }
            Err(e) => e.log("Website status toggle"),
        }
        result
    }

    /// Add visits to a website's counter
    ///
    /// The counter saturates instead of wrapping, so it never decreases.
    pub async fn record_visits(&self, id: &str, visits: u64) -> CoreResult<Website> {
        let result = self.apply_visits(id, visits).await;
        match &result {
            Ok(_) => log::debug!("Website {id} recorded {visits} visits"),
            Err(e) => e.log("Visit recording"),
        }
        result
    }

    /// Delete a website
    ///
    /// A second delete of the same id reports `WebsiteNotFound`.
    pub async fn delete_website(&self, id: &str) -> CoreResult<()> {
        let result = self.remove(id).await;
        match &result {
            Ok(()) => log::info!("Website {id} deleted"),
            Err(e) => e.log("Website deletion"),
        }
        result
    }

    /// 批量删除 Website
    pub async fn batch_delete_websites(&self, ids: Vec<String>) -> BatchDeleteResult {
        let mut success_count = 0;
        let mut failures = Vec::new();

        for id in ids {
            match self.delete_website(&id).await {
                Ok(()) => success_count += 1,
                Err(e) => failures.push(BatchDeleteFailure {
                    website_id: id,
                    reason: e.to_string(),
                }),
            }
        }

        log::info!(
            "Batch delete finished: {success_count} deleted, {} failed",
            failures.len()
        );
        BatchDeleteResult {
            success_count,
            failed_count: failures.len(),
            failures,
        }
    }

    // ===== 内部实现 =====

    async fn apply_update(&self, id: &str, request: UpdateWebsiteRequest) -> CoreResult<Website> {
        let _guard = self.ctx.lock_mutations().await;
        let mut website = self.ctx.require_website(id).await?;

        if let Some(ref name) = request.name {
            website.name = clean_name(name)?;
        }
        if let Some(domain) = request.domain {
            website.domain = domain.as_deref().map(clean_domain).transpose()?;
        }

        website.touch(self.ctx.clock.now());
        self.ctx.website_repository.update(&website).await?;
        Ok(website)
    }

    async fn apply_toggle(&self, id: &str) -> CoreResult<Website> {
        let _guard = self.ctx.lock_mutations().await;
        let mut website = self.ctx.require_website(id).await?;

        website.status = website.status.toggled();
        website.touch(self.ctx.clock.now());
        self.ctx.website_repository.update(&website).await?;
        Ok(website)
    }

    async fn apply_visits(&self, id: &str, visits: u64) -> CoreResult<Website> {
        let _guard = self.ctx.lock_mutations().await;
        let mut website = self.ctx.require_website(id).await?;

        if visits == 0 {
            return Ok(website);
        }
        website.visitor_count = website.visitor_count.saturating_add(visits);
        website.touch(self.ctx.clock.now());
        self.ctx.website_repository.update(&website).await?;
        Ok(website)
    }

    async fn remove(&self, id: &str) -> CoreResult<()> {
        let _guard = self.ctx.lock_mutations().await;

        if self.ctx.website_repository.delete(id).await? {
            Ok(())
        } else {
            Err(CoreError::WebsiteNotFound(id.to_string()))
        }
    }
}

/// Normalize a custom domain mapping; blank input is rejected
fn clean_domain(domain: &str) -> CoreResult<String> {
    let domain = domain.trim().trim_end_matches('.').to_lowercase();
    if domain.is_empty() {
        return Err(CoreError::ValidationError(
            "Custom domain cannot be empty".to_string(),
        ));
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(CoreError::ValidationError(format!(
            "Custom domain contains whitespace: '{domain}'"
        )));
    }
    Ok(domain)
}
