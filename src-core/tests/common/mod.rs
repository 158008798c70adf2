use std::sync::Arc;

use investfolio_core::db::{self, DbPool};

/// Initializes a migrated database inside the given temp dir and returns the
/// pool.
pub fn setup_test_db(dir: &tempfile::TempDir) -> Arc<DbPool> {
    let db_path = dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let db_path = db::init(&db_path).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    pool
}
