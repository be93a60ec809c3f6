//! Activity feed endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::ActivityDto};

/// List the whole activity feed
#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    responses(
        (status = 200, description = "Activity feed", body = Vec<ActivityDto>)
    )
)]
pub async fn list_activities(State(state): State<crate::AppState>) -> Json<Vec<ActivityDto>> {
    Json(state.services.activities.feed())
}

/// Get an activity by ID
#[utoipa::path(
    get,
    path = "/activities/{id}",
    tag = "activities",
    params(
        ("id" = String, Path, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Activity details", body = ActivityDto),
        (status = 404, description = "Activity not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_activity(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ActivityDto>> {
    let activity = state.services.activities.get_by_id(&id)?;
    Ok(Json(activity))
}
