//! Query layer over the entity store
//!
//! Each resource is reached through a provider trait so that a different
//! backing store can be plugged in without touching the services. The only
//! implementations today read from the in-memory [`Store`].

pub mod books;
pub mod shelves;
pub mod users;

use std::sync::Arc;

use crate::store::Store;

pub use books::BookProvider;
pub use shelves::ShelfProvider;
pub use users::UserProvider;

/// Container for all providers
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookProvider>,
    pub users: Arc<dyn UserProvider>,
    pub shelves: Arc<dyn ShelfProvider>,
}

impl Repository {
    /// Create a repository whose providers all read from `store`
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            books: Arc::new(books::StoreBooks::new(store.clone())),
            users: Arc::new(users::StoreUsers::new(store.clone())),
            shelves: Arc::new(shelves::StoreShelves::new(store)),
        }
    }

    /// Create a repository from explicit provider implementations
    pub fn with_providers(
        books: Arc<dyn BookProvider>,
        users: Arc<dyn UserProvider>,
        shelves: Arc<dyn ShelfProvider>,
    ) -> Self {
        Self {
            books,
            users,
            shelves,
        }
    }
}
