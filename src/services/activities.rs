//! Activity feed service

use crate::{
    error::{AppError, AppResult},
    models::{Activity, ActivityDto},
    repository::Repository,
};

#[derive(Clone)]
pub struct ActivitiesService {
    repository: Repository,
}

impl ActivitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Whole feed with linked users and books
    pub fn feed(&self) -> Vec<ActivityDto> {
        self.repository
            .users
            .get_all_activities()
            .iter()
            .map(|activity| link(&self.repository, activity))
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<ActivityDto> {
        self.repository
            .users
            .get_activity_by_id(id)
            .map(|activity| link(&self.repository, &activity))
            .ok_or_else(|| AppError::not_found("Activity", id))
    }
}

/// Resolve an activity's user and book and map the result.
pub(crate) fn link(repository: &Repository, activity: &Activity) -> ActivityDto {
    let user = repository.users.get_user_by_id(&activity.user_id);
    let book = activity
        .book_id
        .as_deref()
        .and_then(|book_id| repository.books.get_book_by_id(book_id));

    if user.is_none() {
        tracing::warn!(
            "Activity {} references unknown user {}",
            activity.id,
            activity.user_id
        );
    }

    ActivityDto::new(activity, user.as_ref(), book.as_ref())
}
