//! Website persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Website;

/// Website Warehouse Trait
///
/// Implementations own two views of the same data: the primary map keyed by
/// `id` and a uniqueness index on the normalized subdomain. Every method must
/// leave both views in agreement when it returns, and readers must never
/// observe one updated without the other.
///
/// Platform implementation:
/// - `site-orchestrator-app`: `InMemoryWebsiteRepository`
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// Get all websites in insertion order
    async fn find_all(&self) -> CoreResult<Vec<Website>>;

    /// Get website based on ID
    ///
    /// # Arguments
    /// * `id` - Website ID
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Website>>;

    /// All normalized subdomains currently in use
    async fn subdomains(&self) -> CoreResult<Vec<String>>;

    /// Insert a new website
    ///
    /// Must fail with `CoreError::InvalidSubdomain(AlreadyTaken)` when the
    /// normalized subdomain is already indexed, without changing anything.
    ///
    /// # Arguments
    /// * `website` - Fully constructed website
    async fn insert(&self, website: &Website) -> CoreResult<()>;

    /// Replace an existing website
    ///
    /// Fails with `CoreError::WebsiteNotFound` when the id is absent.
    ///
    /// # Arguments
    /// * `website` - Updated website (same id and subdomain)
    async fn update(&self, website: &Website) -> CoreResult<()>;

    /// Delete website from the primary map and the subdomain index
    ///
    /// # Returns
    /// * `true` - removed
    /// * `false` - id was not present
    async fn delete(&self, id: &str) -> CoreResult<bool>;
}
