//! Loading the store from a JSON fixture file

use std::path::Path;

use serde::Deserialize;

use super::Store;
use crate::{
    error::AppResult,
    models::{Activity, Book, Shelf, User},
};

/// On-disk shape of a fixture document. Missing collections are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub books: Vec<Book>,
    pub users: Vec<User>,
    pub shelves: Vec<Shelf>,
    pub activities: Vec<Activity>,
}

impl Store {
    /// Parse and validate a fixture document.
    pub fn from_fixture_str(json: &str) -> AppResult<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        Store::new(fixture.books, fixture.users, fixture.shelves, fixture.activities)
    }

    /// Read, parse and validate a fixture file.
    pub fn from_fixture_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading fixture from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_fixture_str(&json)
    }
}
