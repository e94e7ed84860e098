//! Cat record model.
//!
//! # Responsibility
//! - Define the value record stored by the cats repository.
//! - Fix the external JSON shape used by delivery layers.
//!
//! # Invariants
//! - Field contents are not validated: empty names and any age are accepted.
//! - Records are immutable once handed to a repository.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Handle to a stored cat record.
///
/// The repository and every reader hold the same allocation, so identity is
/// observable with `Arc::ptr_eq` while the record itself stays read-only.
pub type SharedCat = Arc<Cat>;

/// A cat record as created by callers and kept by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    /// Lookup key for `find_one`. Matched exactly, case-sensitive.
    pub name: String,
    /// Age in years.
    pub age: u32,
    pub breed: String,
}

impl Cat {
    /// Creates a cat record from its three fields.
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            breed: breed.into(),
        }
    }
}
