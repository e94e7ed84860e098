//! Cat repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide append, enumerate and lookup-by-name over cat records.
//! - Serialize concurrent readers and writers over the shared sequence.
//!
//! # Invariants
//! - Records are only ever appended; nothing is updated or removed.
//! - `find_cat_by_name` returns the earliest inserted exact match.
//! - Readers receive the stored `SharedCat` handles, not deep copies.

use crate::model::cat::{Cat, SharedCat};
use parking_lot::RwLock;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by cat lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No stored record has exactly the requested name.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "Cat {name} not found"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for cat records.
pub trait CatRepository {
    /// Appends `cat` to the tail of the sequence and returns the stored handle.
    fn create_cat(&self, cat: Cat) -> SharedCat;
    /// Returns every stored record in insertion order.
    fn list_cats(&self) -> Vec<SharedCat>;
    /// Returns the first record whose name equals `name` exactly.
    fn find_cat_by_name(&self, name: &str) -> Option<SharedCat>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory cat repository.
///
/// Contents are discarded when the repository is dropped.
#[derive(Debug, Default)]
pub struct InMemoryCatRepository {
    cats: RwLock<Vec<SharedCat>>,
}

impl InMemoryCatRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatRepository for InMemoryCatRepository {
    fn create_cat(&self, cat: Cat) -> SharedCat {
        let stored = Arc::new(cat);
        self.cats.write().push(Arc::clone(&stored));
        stored
    }

    fn list_cats(&self) -> Vec<SharedCat> {
        self.cats.read().clone()
    }

    fn find_cat_by_name(&self, name: &str) -> Option<SharedCat> {
        self.cats
            .read()
            .iter()
            .find(|cat| cat.name == name)
            .cloned()
    }

    fn len(&self) -> usize {
        self.cats.read().len()
    }
}

impl<R: CatRepository + ?Sized> CatRepository for Arc<R> {
    fn create_cat(&self, cat: Cat) -> SharedCat {
        (**self).create_cat(cat)
    }

    fn list_cats(&self) -> Vec<SharedCat> {
        (**self).list_cats()
    }

    fn find_cat_by_name(&self, name: &str) -> Option<SharedCat> {
        (**self).find_cat_by_name(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
