use crate::{error::Result, users, users::User};
use sqlx::SqlitePool;

/// Storage accessor for the user directory.
///
/// Constructed once at process start and handed to the HTTP layer; every
/// operation acquires a pooled connection for the duration of the call.
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a user and return the record with its assigned id
    pub async fn create_user(&self, email: &str, display_name: Option<&str>) -> Result<User> {
        users::create(&self.pool, email, display_name).await
    }

    /// Get every user currently in the table
    pub async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }
}
