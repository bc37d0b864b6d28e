/// Common test utilities and fixtures
use roster_server::state::AppState;
use roster_storage::UserStore;
use std::sync::Arc;
use tempfile::TempDir;

/// Create application state over a fresh temp-file database with migrations
/// applied. The `TempDir` must be kept alive for the duration of the test.
pub async fn create_test_state() -> (AppState, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = roster_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    roster_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(UserStore::new(pool));
    (AppState::new(store), temp_dir)
}
