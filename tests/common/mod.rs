use std::sync::Arc;

use claimfolio_core::db::{self, DbPool};
use tempfile::TempDir;

/// Spins up a throwaway SQLite database with the full schema applied.
/// The TempDir must stay alive for as long as the pool is used.
pub fn setup_test_db() -> (TempDir, Arc<DbPool>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let db_path = db::init(dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    (dir, pool)
}
