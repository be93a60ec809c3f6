//! Shelf model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Genre shelf with the number of books tagged on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub count: u64,
    pub is_curated: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Shelf as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShelfDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub count: u64,
    pub is_curated: bool,
}

impl From<&Shelf> for ShelfDto {
    fn from(shelf: &Shelf) -> Self {
        Self {
            id: shelf.id,
            name: shelf.name.clone(),
            slug: shelf.slug.clone(),
            count: shelf.count,
            is_curated: shelf.is_curated,
        }
    }
}
