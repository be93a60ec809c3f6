//! Data models for BookHive
//!
//! Each module holds an entity, its wire representation (`*Dto`) and the
//! mapping between them.

pub mod activity;
pub mod book;
pub mod shelf;
pub mod user;

// Re-export commonly used types
pub use activity::{Activity, ActivityDto, ActivityType};
pub use book::{fold_case, Book, BookDto};
pub use shelf::{Shelf, ShelfDto};
pub use user::{User, UserDto};
