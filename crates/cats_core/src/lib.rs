//! Core domain logic for the cats record store.
//! Delivery layers construct one `CatService` and route every call through it.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cat::{Cat, SharedCat};
pub use repo::cat_repo::{CatRepository, InMemoryCatRepository, RepoError, RepoResult};
pub use service::cat_service::CatService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
