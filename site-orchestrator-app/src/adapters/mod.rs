//! Platform-agnostic storage adapters.

mod memory;

pub use memory::InMemoryWebsiteRepository;
