//! Storage layer abstraction trait definition

mod clock;
mod template_catalog;
mod website_repository;

pub use clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use template_catalog::{StaticTemplateCatalog, TemplateCatalog};
pub use website_repository::WebsiteRepository;
