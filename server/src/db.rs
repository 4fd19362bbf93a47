//! SQLite pool setup, schema migration and bring-up seed rows.

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Connect to `database_url`, creating the file if needed.
///
/// In-memory databases are private to a connection, so they get a pool of one.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database url: {database_url}"))?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections.max(1));
    if is_memory_url(database_url) {
        // Closing the only connection would drop the database.
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open database {database_url}"))?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run migrations")?;
    Ok(())
}

/// Open an empty, migrated in-memory database.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = connect("sqlite::memory:", 1).await?;
    migrate(&pool).await?;
    Ok(pool)
}

const SEED_MARK: &str = "seed";

/// Insert the two sample rows the first time a database is brought up.
/// Returns the number of rows inserted.
///
/// The first call leaves a mark in `bring_up_marks`, so rows deleted later
/// are never restored. A database that already holds items on its first call
/// is marked without being seeded.
pub async fn seed_once(pool: &SqlitePool) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let marked: Option<i64> =
        sqlx::query_scalar("SELECT applied_at FROM bring_up_marks WHERE name = ?")
            .bind(SEED_MARK)
            .fetch_optional(&mut *tx)
            .await?;
    if marked.is_some() {
        return Ok(0);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todo_items")
        .fetch_one(&mut *tx)
        .await?;

    let now = Utc::now();
    let rows = [
        (
            "Explore the todo API",
            "List, create, update and delete items through /todos",
            false,
            now,
        ),
        (
            "Set up the database",
            "Create the todo_items table and load sample rows",
            true,
            now - Duration::days(1),
        ),
    ];

    let mut inserted = 0;
    if count == 0 {
        for (title, description, is_completed, created_at) in rows {
            inserted += sqlx::query(
                "INSERT INTO todo_items (title, description, is_completed, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(title)
            .bind(description)
            .bind(is_completed)
            .bind(created_at.timestamp_millis())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
    }

    sqlx::query("INSERT INTO bring_up_marks (name, applied_at) VALUES (?, ?)")
        .bind(SEED_MARK)
        .bind(now.timestamp_millis())
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(rows = inserted, "seeded todo_items");
    Ok(inserted)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
