//! Database test fixtures and utilities
//!
//! Every fixture gets its own in-memory SQLite database with migrations
//! applied, so tests are isolated and need no running server.

use sqlx::SqlitePool;

use inkpost::backend::server::config::load_database;

/// Connection string for a private in-memory database
pub const TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Create a migrated, empty test database pool
pub async fn create_test_pool() -> SqlitePool {
    load_database(TEST_DATABASE_URL)
        .await
        .expect("Failed to create test database pool")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Count rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows");
        count
    }
}
