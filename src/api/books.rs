//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::BookDto};

/// Query string of the search endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text searched in title, author and description
    pub query: Option<String>,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<BookDto>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<BookDto>> {
    Json(state.services.books.list())
}

/// Get a book by ID (ISBN)
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (ISBN)")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDto),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookDto>> {
    let book = state.services.books.get_by_id(&id)?;
    Ok(Json(book))
}

/// Search books by title, author or description.
///
/// A missing or blank query returns an empty list without searching.
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookDto>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<BookDto>> {
    match params.query.as_deref() {
        Some(query) if !query.trim().is_empty() => Json(state.services.books.search(query)),
        _ => Json(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        repository::{
            books::MockBookProvider, shelves::MockShelfProvider, users::MockUserProvider,
        },
        services::{test_support::mocked, Services},
        store::Store,
        AppState,
    };

    fn state_with(books: MockBookProvider) -> AppState {
        AppState {
            config: Arc::new(AppConfig::default()),
            store: Arc::new(Store::default()),
            services: Arc::new(Services::new(mocked(
                books,
                MockUserProvider::new(),
                MockShelfProvider::new(),
            ))),
        }
    }

    #[tokio::test]
    async fn blank_query_short_circuits_before_search() {
        for query in [None, Some(""), Some("   ")] {
            let mut books = MockBookProvider::new();
            books.expect_search_books().never();

            let Json(found) = search_books(
                State(state_with(books)),
                Query(SearchQuery {
                    query: query.map(str::to_string),
                }),
            )
            .await;
            assert!(found.is_empty());
        }
    }

    #[tokio::test]
    async fn non_blank_query_reaches_provider() {
        let mut books = MockBookProvider::new();
        books
            .expect_search_books()
            .withf(|query| query == "grisham")
            .times(1)
            .returning(|_| Vec::new());

        let Json(found) = search_books(
            State(state_with(books)),
            Query(SearchQuery {
                query: Some("grisham".to_string()),
            }),
        )
        .await;
        assert!(found.is_empty());
    }
}
