//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::BookDto,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<BookDto> {
        self.repository
            .books
            .get_all_books()
            .iter()
            .map(BookDto::from)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<BookDto> {
        self.repository
            .books
            .get_book_by_id(id)
            .map(|book| BookDto::from(&book))
            .ok_or_else(|| AppError::not_found("Book", id))
    }

    /// Substring search; a blank query returns the whole catalog
    pub fn search(&self, query: &str) -> Vec<BookDto> {
        let results: Vec<BookDto> = self
            .repository
            .books
            .search_books(query)
            .iter()
            .map(BookDto::from)
            .collect();
        tracing::debug!("Book search {:?} matched {} books", query, results.len());
        results
    }
}
