//! User endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{ActivityDto, UserDto},
};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserDto>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> Json<Vec<UserDto>> {
    Json(state.services.users.list())
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserDto>> {
    let user = state.services.users.get_by_id(&id)?;
    Ok(Json(user))
}

/// Get a user's activities
#[utoipa::path(
    get,
    path = "/users/{id}/activities",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User activities", body = Vec<ActivityDto>),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_activities(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ActivityDto>>> {
    let activities = state.services.users.activities(&id)?;
    Ok(Json(activities))
}
