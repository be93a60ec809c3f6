//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Readiness report with the size of each loaded collection
#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub books: usize,
    pub users: usize,
    pub shelves: usize,
    pub activities: usize,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint (the store is loaded before the server binds)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> Json<ReadinessResponse> {
    let store = &state.store;
    Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: store.books().len(),
        users: store.users().len(),
        shelves: store.shelves().len(),
        activities: store.activities().len(),
    })
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

    #[tokio::test]
    async fn readiness_counts_the_store_without_querying_providers() {
        // Unconfigured mocks panic if any provider is called
        let state = AppState {
            config: Arc::new(AppConfig::default()),
            store: Arc::new(Store::seed()),
            services: Arc::new(Services::new(mocked(
                MockBookProvider::new(),
                MockUserProvider::new(),
                MockShelfProvider::new(),
            ))),
        };

        let Json(report) = readiness_check(State(state)).await;
        assert_eq!(report.status, "ready");
        assert_eq!(
            (report.books, report.users, report.shelves, report.activities),
            (5, 5, 10, 5)
        );
    }
}
