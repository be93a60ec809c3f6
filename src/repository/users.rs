//! User and activity queries

use std::sync::Arc;

use crate::{
    models::{Activity, User},
    store::Store,
};

/// Read access to users and their activity feed
#[cfg_attr(test, mockall::automock)]
pub trait UserProvider: Send + Sync {
    fn get_all_users(&self) -> Vec<User>;

    fn get_user_by_id(&self, id: &str) -> Option<User>;

    /// Whole feed, in store order
    fn get_all_activities(&self) -> Vec<Activity>;

    fn get_activity_by_id(&self, id: &str) -> Option<Activity>;

    /// Activities whose `user_id` equals `user_id` exactly
    fn get_user_activities(&self, user_id: &str) -> Vec<Activity>;
}

/// [`UserProvider`] backed by the in-memory store
pub struct StoreUsers {
    store: Arc<Store>,
}

impl StoreUsers {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl UserProvider for StoreUsers {
    fn get_all_users(&self) -> Vec<User> {
        self.store.users().to_vec()
    }

    fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.store.users().iter().find(|u| u.id == id).cloned()
    }

    fn get_all_activities(&self) -> Vec<Activity> {
        self.store.activities().to_vec()
    }

    fn get_activity_by_id(&self, id: &str) -> Option<Activity> {
        self.store.activities().iter().find(|a| a.id == id).cloned()
    }

    fn get_user_activities(&self, user_id: &str) -> Vec<Activity> {
        self.store
            .activities()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }
}
