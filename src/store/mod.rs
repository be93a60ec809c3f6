//! In-memory entity store
//!
//! The store owns every entity for the lifetime of the process. It is built
//! once, either from the built-in seed or from a JSON fixture, and is never
//! written afterwards, so it can be shared behind an `Arc` without locking.

mod fixture;
mod seed;

use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{Activity, Book, Shelf, User},
};

/// Immutable collections of all entities, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Store {
    books: Vec<Book>,
    users: Vec<User>,
    shelves: Vec<Shelf>,
    activities: Vec<Activity>,
}

impl Store {
    /// Build a store from already loaded collections, checking every invariant.
    pub fn new(
        books: Vec<Book>,
        users: Vec<User>,
        shelves: Vec<Shelf>,
        activities: Vec<Activity>,
    ) -> AppResult<Self> {
        let store = Self {
            books,
            users,
            shelves,
            activities,
        };
        store.validate()?;
        Ok(store)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Check id uniqueness and that every activity's foreign keys resolve.
    pub fn validate(&self) -> AppResult<()> {
        let book_ids = unique_string_ids("Book", self.books.iter().map(|b| b.id.as_str()))?;
        let user_ids = unique_string_ids("User", self.users.iter().map(|u| u.id.as_str()))?;
        unique_string_ids("Activity", self.activities.iter().map(|a| a.id.as_str()))?;

        let mut shelf_ids = HashSet::new();
        for shelf in &self.shelves {
            if !shelf_ids.insert(shelf.id) {
                return Err(AppError::InvalidData(format!(
                    "duplicate Shelf id {}",
                    shelf.id
                )));
            }
        }

        for activity in &self.activities {
            if !user_ids.contains(activity.user_id.as_str()) {
                return Err(AppError::InvalidData(format!(
                    "Activity '{}' references unknown user '{}'",
                    activity.id, activity.user_id
                )));
            }
            if let Some(book_id) = activity.book_id.as_deref() {
                if !book_ids.contains(book_id) {
                    return Err(AppError::InvalidData(format!(
                        "Activity '{}' references unknown book '{}'",
                        activity.id, book_id
                    )));
                }
            }
        }

        Ok(())
    }
}

fn unique_string_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> AppResult<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(AppError::InvalidData(format!("{} with empty id", kind)));
        }
        if !seen.insert(id) {
            return Err(AppError::InvalidData(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(seen)
}
