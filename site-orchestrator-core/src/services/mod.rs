//! 业务逻辑服务层

mod provisioning_service;
mod query_service;
mod template_service;
mod website_service;

pub use provisioning_service::ProvisioningService;
pub use query_service::QueryService;
pub use template_service::TemplateService;
pub use website_service::WebsiteService;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{CoreError, CoreResult};
use crate::traits::{Clock, IdGenerator, TemplateCatalog, WebsiteRepository};
use crate::types::Website;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
/// 所有写操作通过 `mutation_lock` 串行化；读操作不加锁。
pub struct ServiceContext {
    /// Website 持久化仓库
    pub website_repository: Arc<dyn WebsiteRepository>,
    /// 模板目录
    pub template_catalog: Arc<dyn TemplateCatalog>,
    /// 时钟
    pub clock: Arc<dyn Clock>,
    /// ID 生成器
    pub id_generator: Arc<dyn IdGenerator>,
    mutation_lock: Mutex<()>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        website_repository: Arc<dyn WebsiteRepository>,
        template_catalog: Arc<dyn TemplateCatalog>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            website_repository,
            template_catalog,
            clock,
            id_generator,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Acquire the single-writer guard held for the duration of a mutation
    pub(crate) async fn lock_mutations(&self) -> MutexGuard<'_, ()> {
        self.mutation_lock.lock().await
    }

    /// 获取 Website，不存在时返回 `WebsiteNotFound`
    pub(crate) async fn require_website(&self, id: &str) -> CoreResult<Website> {
        self.website_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::WebsiteNotFound(id.to_string()))
    }
}

/// Trim a display name, rejecting blank input
pub(crate) fn clean_name(name: &str) -> CoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidName);
    }
    Ok(trimmed.to_string())
}
