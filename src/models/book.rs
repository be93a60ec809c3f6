//! Book model and its wire representation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog book, keyed by its ISBN-13
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub description: String,
    pub book_image_url: String,
    pub author: String,
    pub publisher: String,
    /// Bestseller list the book was picked from
    pub list_name: String,
    /// URL slug of `list_name`
    pub list_name_encoded: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Case-insensitive ordinal substring match on title, author or description.
    ///
    /// `needle` must come from [`fold_case`].
    pub fn matches(&self, needle: &[char]) -> bool {
        [&self.title, &self.author, &self.description]
            .into_iter()
            .any(|field| contains_folded(field, needle))
    }
}

/// Uppercase `text` one char at a time, keeping chars whose uppercase form
/// is not a single char (`ß`, `ŉ`, ...) unchanged.
///
/// Each char maps on its own, so there is no final-sigma or locale rule and
/// no compatibility folding: `ς`, `σ` and `Σ` all fold to `Σ`, while the
/// Kelvin sign stays distinct from `K`.
pub fn fold_case(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn contains_folded(haystack: &str, needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = fold_case(haystack);
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookDto {
    /// ISBN-13
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "book_image")]
    pub book_image_url: String,
    pub author: String,
    pub publisher: String,
    pub list_name: String,
    pub list_name_encoded: String,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            description: book.description.clone(),
            book_image_url: book.book_image_url.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            list_name: book.list_name.clone(),
            list_name_encoded: book.list_name_encoded.clone(),
        }
    }
}
