//! Business logic services

pub mod catalog;
pub mod collection;
pub mod loans;
pub mod students;

use crate::repository::Repository;

/// Owner of the archive state; hands out per-domain services borrowing it
#[derive(Debug)]
pub struct Services {
    repository: Repository,
}

impl Services {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn catalog(&self) -> catalog::CatalogService<'_> {
        catalog::CatalogService::new(&self.repository)
    }

    pub fn collection(&mut self) -> collection::CollectionService<'_> {
        collection::CollectionService::new(&mut self.repository)
    }

    pub fn students(&mut self) -> students::StudentsService<'_> {
        students::StudentsService::new(&mut self.repository)
    }

    pub fn loans(&mut self) -> loans::LoansService<'_> {
        loans::LoansService::new(&mut self.repository)
    }
}
