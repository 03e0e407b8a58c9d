//! Platform-agnostic application bootstrap for Site Orchestrator.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection),
//! configuration loading and logging initialization.

pub mod adapters;
pub mod config;
pub mod logging;

use std::sync::Arc;

use serde::Serialize;

use site_orchestrator_core::error::CoreResult;
use site_orchestrator_core::services::{
    ProvisioningService, QueryService, ServiceContext, TemplateService, WebsiteService,
};
use site_orchestrator_core::traits::{
    Clock, IdGenerator, StaticTemplateCatalog, SystemClock, TemplateCatalog, UuidGenerator,
    WebsiteRepository,
};
use site_orchestrator_core::types::CreateWebsiteRequest;

use adapters::InMemoryWebsiteRepository;
use config::AppConfig;

/// Outcome of an explicit seeding run
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// Number of websites created
    pub created: usize,
    /// `(subdomain, reason)` for every rejected entry
    pub failures: Vec<(String, String)>,
}

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all adapters)
    pub ctx: Arc<ServiceContext>,
    /// Loaded configuration
    pub config: AppConfig,
    /// Template catalog service
    pub template_service: TemplateService,
    /// Provisioning service
    pub provisioning_service: ProvisioningService,
    /// Website store service
    pub website_service: WebsiteService,
    /// Search and statistics service
    pub query_service: QueryService,
}

impl AppState {
    /// Domain under which subdomains are served
    #[must_use]
    pub fn base_domain(&self) -> &str {
        &self.config.hosting.base_domain
    }

    /// Provision every request through the normal workflow.
    ///
    /// Seeding is an explicit operator action; a rejected entry is reported
    /// and the rest continue.
    pub async fn seed(&self, requests: Vec<CreateWebsiteRequest>) -> SeedReport {
        let mut report = SeedReport::default();

        for request in requests {
            let subdomain = request.subdomain.clone();
            match self.provisioning_service.create_website(request).await {
                Ok(_) => report.created += 1,
                Err(e) => report.failures.push((subdomain, e.to_string())),
            }
        }

        log::info!(
            "Seeding complete: {} created, {} failed",
            report.created,
            report.failures.len()
        );
        report
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Optional (all defaulted)
/// - `website_repository`: defaults to `InMemoryWebsiteRepository`
/// - `template_catalog`: defaults to `StaticTemplateCatalog::builtin()`
/// - `clock`: defaults to `SystemClock`
/// - `id_generator`: defaults to `UuidGenerator`
/// - `config`: defaults to `AppConfig::default()`
pub struct AppStateBuilder {
    website_repository: Option<Arc<dyn WebsiteRepository>>,
    template_catalog: Option<Arc<dyn TemplateCatalog>>,
    clock: Option<Arc<dyn Clock>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            website_repository: None,
            template_catalog: None,
            clock: None,
            id_generator: None,
            config: None,
        }
    }

    #[must_use]
    pub fn website_repository(mut self, repo: Arc<dyn WebsiteRepository>) -> Self {
        self.website_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn template_catalog(mut self, catalog: Arc<dyn TemplateCatalog>) -> Self {
        self.template_catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(ids);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ConfigError` if the configuration is invalid.
    pub fn build(self) -> CoreResult<AppState> {
        let website_repository = self
            .website_repository
            .unwrap_or_else(|| Arc::new(InMemoryWebsiteRepository::new()));
        let template_catalog = self
            .template_catalog
            .unwrap_or_else(|| Arc::new(StaticTemplateCatalog::builtin()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let id_generator = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UuidGenerator));
        let config = self.config.unwrap_or_default().validated()?;

        let ctx = Arc::new(ServiceContext::new(
            website_repository,
            Arc::clone(&template_catalog),
            clock,
            id_generator,
        ));

        log::info!(
            "Site orchestrator ready ({} templates, base domain {})",
            template_catalog.list().len(),
            config.hosting.base_domain
        );

        Ok(AppState {
            template_service: TemplateService::new(template_catalog),
            provisioning_service: ProvisioningService::new(Arc::clone(&ctx)),
            website_service: WebsiteService::new(Arc::clone(&ctx)),
            query_service: QueryService::new(Arc::clone(&ctx)),
            ctx,
            config,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
