//! User service

use crate::{
    error::{AppError, AppResult},
    models::{ActivityDto, UserDto},
    repository::Repository,
};

use super::activities::link;

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<UserDto> {
        self.repository
            .users
            .get_all_users()
            .iter()
            .map(UserDto::from)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<UserDto> {
        self.repository
            .users
            .get_user_by_id(id)
            .map(|user| UserDto::from(&user))
            .ok_or_else(|| {
                tracing::info!("User {} not found", id);
                AppError::not_found("User", id)
            })
    }

    /// Activities of an existing user.
    ///
    /// Fails with `NotFound` before any activity lookup when the user does
    /// not exist; an existing user without activities yields an empty list.
    pub fn activities(&self, user_id: &str) -> AppResult<Vec<ActivityDto>> {
        self.get_by_id(user_id)?;

        let activities = self.repository.users.get_user_activities(user_id);
        tracing::debug!("User {} has {} activities", user_id, activities.len());

        Ok(activities
            .iter()
            .map(|activity| link(&self.repository, activity))
            .collect())
    }
}
