//! BookHive API server
//!
//! A read-only REST JSON API over an in-memory catalog of books, shelves,
//! readers and their activity feed.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<store::Store>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire providers and services over `store`
    pub fn new(config: AppConfig, store: Arc<store::Store>) -> Self {
        let repository = repository::Repository::new(store.clone());
        Self {
            config: Arc::new(config),
            store,
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
