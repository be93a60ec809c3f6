//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{activities, books, health, shelves, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BookHive API",
        version = "1.0.0",
        description = "Read-only book catalog, shelves, readers and activity feed"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::search_books,
        // Users
        users::list_users,
        users::get_user,
        users::get_user_activities,
        // Shelves
        shelves::list_shelves,
        shelves::get_shelf,
        shelves::get_user_shelves,
        // Activities
        activities::list_activities,
        activities::get_activity,
    ),
    components(
        schemas(
            crate::models::BookDto,
            crate::models::UserDto,
            crate::models::ShelfDto,
            crate::models::ActivityDto,
            crate::models::ActivityType,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and search"),
        (name = "users", description = "Readers and their activities"),
        (name = "shelves", description = "Genre shelves"),
        (name = "activities", description = "Activity feed")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
