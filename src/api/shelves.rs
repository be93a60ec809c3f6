//! Shelf endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::ShelfDto};

/// List all shelves
#[utoipa::path(
    get,
    path = "/shelves",
    tag = "shelves",
    responses(
        (status = 200, description = "List of shelves", body = Vec<ShelfDto>)
    )
)]
pub async fn list_shelves(State(state): State<crate::AppState>) -> Json<Vec<ShelfDto>> {
    Json(state.services.shelves.list())
}

/// Get a shelf by ID
#[utoipa::path(
    get,
    path = "/shelves/{id}",
    tag = "shelves",
    params(
        ("id" = i32, Path, description = "Shelf ID")
    ),
    responses(
        (status = 200, description = "Shelf details", body = ShelfDto),
        (status = 404, description = "Shelf not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_shelf(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ShelfDto>> {
    let shelf = state.services.shelves.get_by_id(id)?;
    Ok(Json(shelf))
}

/// Get a user's shelves
///
/// Shelves are not scoped to users yet: any existing user gets every shelf.
#[utoipa::path(
    get,
    path = "/shelves/user/{user_id}",
    tag = "shelves",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User shelves", body = Vec<ShelfDto>),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_shelves(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<ShelfDto>>> {
    let shelves = state.services.shelves.user_shelves(&user_id)?;
    Ok(Json(shelves))
}
