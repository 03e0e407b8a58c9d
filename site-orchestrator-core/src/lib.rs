//! Site Orchestrator Core Library
//!
//! Provides the core business logic for managing hosted websites, including:
//! - Template catalog (Template Service)
//! - Website provisioning (Provisioning Service)
//! - Website lifecycle and field updates (Website Service)
//! - Search and aggregate statistics (Query Service)
//!
//! This library is platform-independent. Storage, time and identifier
//! generation are abstracted through traits so any backend can be plugged in.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{Clock, IdGenerator, TemplateCatalog, WebsiteRepository};
