//! Book queries

use std::sync::Arc;

use crate::{
    models::{fold_case, Book},
    store::Store,
};

/// Read access to the book catalog
#[cfg_attr(test, mockall::automock)]
pub trait BookProvider: Send + Sync {
    /// All books, in store order
    fn get_all_books(&self) -> Vec<Book>;

    /// Book by exact (case-sensitive) ISBN
    fn get_book_by_id(&self, id: &str) -> Option<Book>;

    /// Books whose title, author or description contain `query`, ignoring case.
    ///
    /// A blank query matches every book.
    fn search_books(&self, query: &str) -> Vec<Book>;
}

/// [`BookProvider`] backed by the in-memory store
pub struct StoreBooks {
    store: Arc<Store>,
}

impl StoreBooks {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl BookProvider for StoreBooks {
    fn get_all_books(&self) -> Vec<Book> {
        self.store.books().to_vec()
    }

    fn get_book_by_id(&self, id: &str) -> Option<Book> {
        self.store.books().iter().find(|b| b.id == id).cloned()
    }

    fn search_books(&self, query: &str) -> Vec<Book> {
        if query.trim().is_empty() {
            return self.get_all_books();
        }

        let needle = fold_case(query);
        self.store
            .books()
            .iter()
            .filter(|b| b.matches(&needle))
            .cloned()
            .collect()
    }
}
