//! In-memory `WebsiteRepository`.
//!
//! The primary map, the insertion order and the subdomain index live behind
//! one `RwLock`, so a writer updates all three before any reader can look.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use site_orchestrator_core::error::{CoreError, CoreResult};
use site_orchestrator_core::traits::WebsiteRepository;
use site_orchestrator_core::types::{SubdomainRejection, Website};
use site_orchestrator_core::utils::subdomain::normalize_subdomain;

#[derive(Default)]
struct Inner {
    by_id: HashMap<String, Website>,
    /// Website ids in insertion order
    order: Vec<String>,
    /// normalized subdomain -> website id
    subdomain_index: HashMap<String, String>,
}

/// Process-local website store, empty at construction
#[derive(Default)]
pub struct InMemoryWebsiteRepository {
    inner: RwLock<Inner>,
}

impl InMemoryWebsiteRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored websites
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl WebsiteRepository for InMemoryWebsiteRepository {
    async fn find_all(&self) -> CoreResult<Vec<Website>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Website>> {
        Ok(self.inner.read().await.by_id.get(id).cloned())
    }

    async fn subdomains(&self) -> CoreResult<Vec<String>> {
        Ok(self
            .inner
            .read()
            .await
            .subdomain_index
            .keys()
            .cloned()
            .collect())
    }

    async fn insert(&self, website: &Website) -> CoreResult<()> {
        let mut inner = self.inner.write().await;
        let key = normalize_subdomain(&website.subdomain);

        if inner.subdomain_index.contains_key(&key) {
            return Err(CoreError::InvalidSubdomain(SubdomainRejection::AlreadyTaken));
        }
        if inner.by_id.contains_key(&website.id) {
            return Err(CoreError::StorageError(format!(
                "Website id already in use: {}",
                website.id
            )));
        }

        inner.subdomain_index.insert(key, website.id.clone());
        inner.order.push(website.id.clone());
        inner.by_id.insert(website.id.clone(), website.clone());
        Ok(())
    }

    async fn update(&self, website: &Website) -> CoreResult<()> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .by_id
            .get_mut(&website.id)
            .ok_or_else(|| CoreError::WebsiteNotFound(website.id.clone()))?;

        if normalize_subdomain(&slot.subdomain) != normalize_subdomain(&website.subdomain) {
            return Err(CoreError::ValidationError(format!(
                "Subdomain of website {} cannot change",
                website.id
            )));
        }

        *slot = website.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<bool> {
        let mut inner = self.inner.write().await;
        let Some(removed) = inner.by_id.remove(id) else {
            return Ok(false);
        };

        inner
            .subdomain_index
            .remove(&normalize_subdomain(&removed.subdomain));
        inner.order.retain(|existing| existing != id);
        Ok(true)
    }
}
