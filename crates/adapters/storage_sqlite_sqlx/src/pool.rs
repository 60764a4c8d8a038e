//! `SQLite` pool construction and schema migrations.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// Where the phone model table lives.
pub struct Config {
    /// `sqlx` URL, e.g. `sqlite:handyhub.db?mode=rwc` or `sqlite::memory:`.
    pub database_url: String,
}

impl Config {
    fn is_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }

    /// Every connection to `:memory:` opens its own empty database, so the
    /// in-memory pool holds exactly one connection that never expires.
    fn pool_options(&self) -> SqlitePoolOptions {
        if self.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        }
    }

    /// Open the pool, creating the database file when missing, and bring the
    /// schema up to date.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for a malformed URL, a failed connection or a
    /// failed migration.
    pub async fn build(self) -> Result<Database, StorageError> {
        let connect = SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);
        let pool = self.pool_options().connect_with(connect).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Database { pool })
    }
}

/// A migrated connection pool.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_only_handy_models_table_when_using_memory_db() {
        let db = memory_db().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert_eq!(names, ["handy_models"]);
    }

    #[tokio::test]
    async fn should_share_memory_db_across_pool_checkouts() {
        let db = memory_db().await;
        sqlx::query(
            "INSERT INTO handy_models (id, name, battery_life, serial_number, brand_id) VALUES ('a', 'n', 1, 's', 'b')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let pool = db.pool().clone();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM handy_models")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn should_detect_memory_urls() {
        let memory = Config {
            database_url: "sqlite::memory:".to_string(),
        };
        let file = Config {
            database_url: "sqlite:handyhub.db?mode=rwc".to_string(),
        };
        assert!(memory.is_memory());
        assert!(!file.is_memory());
    }
}
