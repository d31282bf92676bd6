//! Business logic services

pub mod shelf;

use std::sync::Arc;

use crate::repository::BookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub shelf: shelf::ShelfService,
}

impl Services {
    /// Create all services backed by a fresh in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(BookStore::new()))
    }

    /// Create all services sharing the given store
    pub fn with_store(store: Arc<BookStore>) -> Self {
        Self {
            shelf: shelf::ShelfService::new(store),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
