//! Business logic services
//!
//! Services sit between the HTTP handlers and the providers: they turn
//! missing records into [`AppError::NotFound`](crate::error::AppError) and
//! map entities to their wire records.

pub mod activities;
pub mod books;
pub mod shelves;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub users: users::UsersService,
    pub shelves: shelves::ShelvesService,
    pub activities: activities::ActivitiesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            shelves: shelves::ShelvesService::new(repository.clone()),
            activities: activities::ActivitiesService::new(repository),
        }
    }
}
