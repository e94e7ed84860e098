//! Cat use-case service.
//!
//! # Responsibility
//! - Provide the create / list / find entry points used by delivery layers.
//! - Turn repository misses into `RepoError::NotFound`.
//!
//! # Invariants
//! - Service calls are synchronous and never suspend.
//! - Only `find_one` can fail.
//! - Log events carry metadata only, never record contents.

use crate::model::cat::{Cat, SharedCat};
use crate::repo::cat_repo::{CatRepository, InMemoryCatRepository, RepoError, RepoResult};
use log::{debug, warn};

/// Use-case service wrapper for cat records.
///
/// Built once by the composition root and passed by reference to consumers.
#[derive(Debug)]
pub struct CatService<R: CatRepository = InMemoryCatRepository> {
    repo: R,
}

impl<R: CatRepository> CatService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a cat record. Always succeeds.
    pub fn create(&self, cat: Cat) -> SharedCat {
        let stored = self.repo.create_cat(cat);
        debug!("event=cat_create module=service status=ok");
        stored
    }

    /// Returns all stored cats in insertion order, duplicates included.
    pub fn find_all(&self) -> Vec<SharedCat> {
        let cats = self.repo.list_cats();
        debug!(
            "event=cat_list module=service status=ok count={}",
            cats.len()
        );
        cats
    }

    /// Returns the earliest inserted cat whose name equals `name` exactly.
    ///
    /// # Errors
    /// - `RepoError::NotFound(name)` when no stored cat has that name.
    pub fn find_one(&self, name: &str) -> RepoResult<SharedCat> {
        match self.repo.find_cat_by_name(name) {
            Some(cat) => {
                debug!("event=cat_find module=service status=ok");
                Ok(cat)
            }
            None => {
                warn!(
                    "event=cat_find module=service status=not_found name_len={}",
                    name.chars().count()
                );
                Err(RepoError::NotFound(name.to_string()))
            }
        }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl Default for CatService<InMemoryCatRepository> {
    fn default() -> Self {
        Self::new(InMemoryCatRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use super::CatService;
    use crate::model::cat::Cat;
    use crate::repo::cat_repo::{CatRepository, InMemoryCatRepository};
    use std::sync::Arc;

    #[test]
    fn service_is_constructed_empty() {
        let service: CatService = CatService::default();
        assert!(service.find_all().is_empty());
        assert!(service.repository().is_empty());
    }

    #[test]
    fn services_over_one_shared_repository_see_the_same_records() {
        let repo = Arc::new(InMemoryCatRepository::new());
        let writer = CatService::new(Arc::clone(&repo));
        let reader = CatService::new(Arc::clone(&repo));

        writer.create(Cat::new("Milo", 3, "Tabby"));

        assert_eq!(reader.find_one("Milo").unwrap().breed, "Tabby");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn concurrent_creates_through_one_service_are_all_kept() {
        let service = Arc::new(CatService::new(InMemoryCatRepository::new()));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        service.create(Cat::new(format!("cat-{worker}-{i}"), i, "Mixed"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(service.find_all().len(), 40);
    }
}
