//! Shelf queries

use std::sync::Arc;

use crate::{models::Shelf, store::Store};

/// Read access to shelves
#[cfg_attr(test, mockall::automock)]
pub trait ShelfProvider: Send + Sync {
    fn get_all_shelves(&self) -> Vec<Shelf>;

    fn get_shelf_by_id(&self, id: i32) -> Option<Shelf>;

    /// Shelves for a user.
    ///
    /// Shelves carry no owner yet, so implementations return every shelf
    /// regardless of `user_id`.
    fn get_user_shelves(&self, user_id: &str) -> Vec<Shelf>;
}

/// [`ShelfProvider`] backed by the in-memory store
pub struct StoreShelves {
    store: Arc<Store>,
}

impl StoreShelves {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl ShelfProvider for StoreShelves {
    fn get_all_shelves(&self) -> Vec<Shelf> {
        self.store.shelves().to_vec()
    }

    fn get_shelf_by_id(&self, id: i32) -> Option<Shelf> {
        self.store.shelves().iter().find(|s| s.id == id).cloned()
    }

    fn get_user_shelves(&self, _user_id: &str) -> Vec<Shelf> {
        // TODO: scope to the user once shelves record who created them
        self.get_all_shelves()
    }
}
