//! User persistence queries

use crate::StorageError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

/// User record as persisted in the `users` table.
///
/// The display name is stored in the `nombre` column; queries alias it so
/// the struct and the wire shape share one field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the database on insert
    pub id: i64,

    /// Email address
    pub email: String,

    /// Optional display name (column `nombre`)
    pub display_name: Option<String>,
}

/// Insert a new user and return the fully populated record.
///
/// The insert runs in its own implicit transaction, so the row is committed
/// before this function returns.
pub async fn create(
    pool: &SqlitePool,
    email: &str,
    display_name: Option<&str>,
) -> Result<User> {
    let mut conn = pool.acquire().await?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, nombre) VALUES (?, ?)
         RETURNING id, email, nombre AS display_name",
    )
    .bind(email)
    .bind(display_name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(user)
}

/// Get all users, in storage-native order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let mut conn = pool.acquire().await?;

    let users = sqlx::query_as("SELECT id, email, nombre AS display_name FROM users")
        .fetch_all(&mut *conn)
        .await?;

    Ok(users)
}
