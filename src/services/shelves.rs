//! Shelf service

use crate::{
    error::{AppError, AppResult},
    models::ShelfDto,
    repository::Repository,
};

#[derive(Clone)]
pub struct ShelvesService {
    repository: Repository,
}

impl ShelvesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<ShelfDto> {
        self.repository
            .shelves
            .get_all_shelves()
            .iter()
            .map(ShelfDto::from)
            .collect()
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<ShelfDto> {
        self.repository
            .shelves
            .get_shelf_by_id(id)
            .map(|shelf| ShelfDto::from(&shelf))
            .ok_or_else(|| AppError::not_found("Shelf", id))
    }

    /// Shelves of an existing user (currently every shelf)
    pub fn user_shelves(&self, user_id: &str) -> AppResult<Vec<ShelfDto>> {
        if self.repository.users.get_user_by_id(user_id).is_none() {
            tracing::info!("User {} not found", user_id);
            return Err(AppError::not_found("User", user_id));
        }

        Ok(self
            .repository
            .shelves
            .get_user_shelves(user_id)
            .iter()
            .map(ShelfDto::from)
            .collect())
    }
}
