//! SQLite connection setup and table DDL. Tables are created at startup when absent.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const TABLES: &[(&str, &str)] = &[
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    ),
    (
        "subjects",
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            student_id INTEGER NOT NULL REFERENCES students (id) ON DELETE RESTRICT
        )
        "#,
    ),
];

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool on `database_url`, creating the database file if missing.
/// Foreign keys are enforced on every connection. An in-memory database lives only as long as
/// its connection, so the pool is pinned to one connection that never expires.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };
    tracing::info!(database_url = %database_url, "connected to database");
    Ok(pool)
}

/// Create `students` and `subjects` if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = %name, "ensured table");
    }
    sqlx::query("CREATE INDEX IF NOT EXISTS subjects_student_id_idx ON subjects (student_id)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Fresh in-memory database with tables in place.
#[cfg(test)]
pub(crate) async fn memory_pool() -> Result<SqlitePool, AppError> {
    let pool = connect("sqlite::memory:", 1).await?;
    ensure_tables(&pool).await?;
    Ok(pool)
}
