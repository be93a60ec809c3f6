//! Activity feed model
//!
//! An activity links a user to an optional book. The wire record embeds
//! both linked records when they resolve, and an explicit `null` when
//! they don't.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    book::{Book, BookDto},
    user::{User, UserDto},
};

/// Kind of feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Read,
    Rated,
    Reviewed,
}

/// Feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// References `User::id`
    pub user_id: String,
    pub activity_type: ActivityType,
    /// Star rating as displayed ("1" to "5")
    #[serde(default)]
    pub rating: Option<String>,
    pub activity_content: String,
    /// References `Book::id`
    #[serde(default)]
    pub book_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Feed entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: String,
    pub user_id: String,
    pub activity_type: ActivityType,
    pub rating: Option<String>,
    pub activity_content: String,
    pub book_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Linked user, `null` when `userId` does not resolve
    pub user: Option<UserDto>,
    /// Linked book, `null` when there is no `bookId` or it does not resolve
    pub book: Option<BookDto>,
}

impl ActivityDto {
    /// Map an activity together with whatever its foreign keys resolved to.
    pub fn new(activity: &Activity, user: Option<&User>, book: Option<&Book>) -> Self {
        Self {
            id: activity.id.clone(),
            user_id: activity.user_id.clone(),
            activity_type: activity.activity_type,
            rating: activity.rating.clone(),
            activity_content: activity.activity_content.clone(),
            book_id: activity.book_id.clone(),
            timestamp: activity.timestamp,
            user: user.map(UserDto::from),
            book: book.map(BookDto::from),
        }
    }
}
