//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ProvisioningService, QueryService, ServiceContext, WebsiteService};
use crate::traits::{Clock, IdGenerator, StaticTemplateCatalog, WebsiteRepository};
use crate::types::{CreateWebsiteRequest, SubdomainRejection, Website};
use crate::utils::subdomain::normalize_subdomain;

// ===== MockWebsiteRepository =====

pub struct MockWebsiteRepository {
    websites: RwLock<Vec<Website>>,
    /// 如果 Some，insert/update/delete 时返回此错误（用于测试失败路径）
    write_error: RwLock<Option<String>>,
}

impl MockWebsiteRepository {
    pub fn new() -> Self {
        Self {
            websites: RwLock::new(Vec::new()),
            write_error: RwLock::new(None),
        }
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    pub async fn len(&self) -> usize {
        self.websites.read().await.len()
    }

    async fn check_write_error(&self) -> CoreResult<()> {
        match *self.write_error.read().await {
            Some(ref msg) => Err(CoreError::StorageError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WebsiteRepository for MockWebsiteRepository {
    async fn find_all(&self) -> CoreResult<Vec<Website>> {
        Ok(self.websites.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Website>> {
        Ok(self
            .websites
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn subdomains(&self) -> CoreResult<Vec<String>> {
        Ok(self
            .websites
            .read()
            .await
            .iter()
            .map(|w| normalize_subdomain(&w.subdomain))
            .collect())
    }

    async fn insert(&self, website: &Website) -> CoreResult<()> {
        self.check_write_error().await?;
        let mut store = self.websites.write().await;
        let normalized = normalize_subdomain(&website.subdomain);
        if store
            .iter()
            .any(|w| normalize_subdomain(&w.subdomain) == normalized)
        {
            return Err(CoreError::InvalidSubdomain(SubdomainRejection::AlreadyTaken));
        }
        store.push(website.clone());
        Ok(())
    }

    async fn update(&self, website: &Website) -> CoreResult<()> {
        self.check_write_error().await?;
        let mut store = self.websites.write().await;
        let slot = store
            .iter_mut()
            .find(|w| w.id == website.id)
            .ok_or_else(|| CoreError::WebsiteNotFound(website.id.clone()))?;
        *slot = website.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<bool> {
        self.check_write_error().await?;
        let mut store = self.websites.write().await;
        let before = store.len();
        store.retain(|w| w.id != id);
        Ok(store.len() != before)
    }
}

// ===== FixedClock =====

/// 可手动推进的时钟
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap() = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ===== SequentialIdGenerator =====

pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        format!("site-{}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockWebsiteRepository>,
    Arc<FixedClock>,
) {
    let repo = Arc::new(MockWebsiteRepository::new());
    let clock = Arc::new(FixedClock::new());

    let ctx = Arc::new(ServiceContext::new(
        repo.clone(),
        Arc::new(StaticTemplateCatalog::builtin()),
        clock.clone(),
        Arc::new(SequentialIdGenerator::new()),
    ));

    (ctx, repo, clock)
}

/// 测试用服务集合
pub struct TestServices {
    pub provisioning: ProvisioningService,
    pub websites: WebsiteService,
    pub queries: QueryService,
    pub repo: Arc<MockWebsiteRepository>,
    pub clock: Arc<FixedClock>,
}

/// 创建共享同一上下文的全部服务
pub fn create_test_services() -> TestServices {
    let (ctx, repo, clock) = create_test_context();
    TestServices {
        provisioning: ProvisioningService::new(Arc::clone(&ctx)),
        websites: WebsiteService::new(Arc::clone(&ctx)),
        queries: QueryService::new(ctx),
        repo,
        clock,
    }
}

/// 创建一个基于 blog 模板的请求
pub fn blog_request(name: &str, subdomain: &str) -> CreateWebsiteRequest {
    CreateWebsiteRequest {
        name: name.to_string(),
        subdomain: subdomain.to_string(),
        template_id: "blog".to_string(),
        owner: "Current User".to_string(),
        description: None,
    }
}
