//! Roster Storage
//!
//! `SQLite` persistence layer for the roster user directory.
//!
//! This crate owns the `users` table and exposes the two operations the
//! service needs: insert a user and scan the whole table.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{UserStore, create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://roster.db").await?;
//! run_migrations(&pool).await?;
//!
//! // Build the storage accessor handed to the HTTP layer
//! let store = UserStore::new(pool);
//!
//! let users = store.list_users().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod users;

pub use error::StorageError;
pub use store::UserStore;
pub use users::User;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    // Create pool with the configured options
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Database pool created for {}", database_url);

    Ok(pool)
}
