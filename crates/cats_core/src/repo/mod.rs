//! Repository layer abstractions and in-memory storage.
//!
//! # Responsibility
//! - Define the data access contract consumed by the service layer.
//! - Keep locking details out of service/business orchestration.
//!
//! # Invariants
//! - Stored records keep insertion order.
//! - Lookups return semantic errors (`NotFound`) instead of empty values at
//!   the service boundary.

pub mod cat_repo;
