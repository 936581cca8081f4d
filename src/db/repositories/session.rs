//! Session repository
//!
//! Database operations for recorded pomodoro sessions.
//!
//! This module provides:
//! - `SessionRepository` trait defining the interface for session data access
//! - `SqlxSessionRepository` implementing the trait for SQLite and PostgreSQL

use crate::config::DatabaseDriver;
use crate::db::{migrations, DynDatabasePool};
use crate::models::{CreateSessionInput, DateRange, Session};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, SqlitePool};
use std::sync::Arc;

/// Session repository trait
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a session; the store assigns id and date
    async fn create(&self, input: &CreateSessionInput) -> Result<Session>;

    /// Sessions whose date falls inside `range`, ordered by date then id
    async fn list_in_range(&self, range: &DateRange) -> Result<Vec<Session>>;

    /// Sessions named `name` whose date falls inside `range`
    async fn list_by_name_in_range(&self, name: &str, range: &DateRange) -> Result<Vec<Session>>;

    /// Distinct session names, sorted
    async fn list_names(&self) -> Result<Vec<String>>;

    /// Delete by id, returning the number of rows removed
    async fn delete(&self, id: i64) -> Result<u64>;

    /// Drop and recreate the session table
    async fn reset(&self) -> Result<()>;
}

/// SQLx-based session repository implementation
pub struct SqlxSessionRepository {
    pool: DynDatabasePool,
}

impl SqlxSessionRepository {
    /// Create a new SQLx session repository
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn SessionRepository> {
        Arc::new(Self::new(pool))
    }

    fn sqlite(&self) -> Result<&SqlitePool> {
        self.pool.as_sqlite().context("SQLite pool unavailable")
    }

    fn postgres(&self) -> Result<&PgPool> {
        self.pool.as_postgres().context("PostgreSQL pool unavailable")
    }
}

#[async_trait]
impl SessionRepository for SqlxSessionRepository {
    async fn create(&self, input: &CreateSessionInput) -> Result<Session> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => create_sqlite(self.sqlite()?, input).await,
            DatabaseDriver::Postgres => create_postgres(self.postgres()?, input).await,
        }
    }

    async fn list_in_range(&self, range: &DateRange) -> Result<Vec<Session>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => list_in_range_sqlite(self.sqlite()?, range).await,
            DatabaseDriver::Postgres => list_in_range_postgres(self.postgres()?, range).await,
        }
    }

    async fn list_by_name_in_range(&self, name: &str, range: &DateRange) -> Result<Vec<Session>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                list_by_name_sqlite(self.sqlite()?, name, range).await
            }
            DatabaseDriver::Postgres => {
                list_by_name_postgres(self.postgres()?, name, range).await
            }
        }
    }

    async fn list_names(&self) -> Result<Vec<String>> {
        let query = "SELECT DISTINCT name FROM session ORDER BY name";
        let names = match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                sqlx::query_scalar::<_, String>(query)
                    .fetch_all(self.sqlite()?)
                    .await
            }
            DatabaseDriver::Postgres => {
                sqlx::query_scalar::<_, String>(query)
                    .fetch_all(self.postgres()?)
                    .await
            }
        };
        names.context("Failed to list session names")
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = match self.pool.driver() {
            DatabaseDriver::Sqlite => sqlx::query("DELETE FROM session WHERE id = ?")
                .bind(id)
                .execute(self.sqlite()?)
                .await
                .map(|r| r.rows_affected()),
            DatabaseDriver::Postgres => {
                // SERIAL ids are INT4; anything wider cannot match a row.
                let Ok(id) = i32::try_from(id) else {
                    return Ok(0);
                };
                sqlx::query("DELETE FROM session WHERE id = $1")
                    .bind(id)
                    .execute(self.postgres()?)
                    .await
                    .map(|r| r.rows_affected())
            }
        };
        result.with_context(|| format!("Failed to delete session {}", id))
    }

    async fn reset(&self) -> Result<()> {
        migrations::recreate_session_table(&self.pool).await
    }
}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn create_sqlite(pool: &SqlitePool, input: &CreateSessionInput) -> Result<Session> {
    let result = sqlx::query("INSERT INTO session (name, duration_in_minutes) VALUES (?, ?)")
        .bind(&input.name)
        .bind(input.duration_in_minutes)
        .execute(pool)
        .await
        .context("Failed to insert session")?;

    let row = sqlx::query("SELECT id, name, date, duration_in_minutes FROM session WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await
        .context("Failed to read back inserted session")?;

    row_to_session_sqlite(&row)
}

async fn list_in_range_sqlite(pool: &SqlitePool, range: &DateRange) -> Result<Vec<Session>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, date, duration_in_minutes
        FROM session
        WHERE date BETWEEN ? AND ?
        ORDER BY date, id
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await
    .context("Failed to list sessions")?;

    rows.iter().map(row_to_session_sqlite).collect()
}

async fn list_by_name_sqlite(
    pool: &SqlitePool,
    name: &str,
    range: &DateRange,
) -> Result<Vec<Session>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, date, duration_in_minutes
        FROM session
        WHERE name = ? AND date BETWEEN ? AND ?
        ORDER BY date, id
        "#,
    )
    .bind(name)
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Failed to list sessions named {}", name))?;

    rows.iter().map(row_to_session_sqlite).collect()
}

fn row_to_session_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<Session> {
    Ok(Session {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        date: row.try_get("date")?,
        duration_in_minutes: row
            .try_get::<Option<i32>, _>("duration_in_minutes")?
            .unwrap_or_default(),
    })
}

// ============================================================================
// PostgreSQL implementations
// ============================================================================

async fn create_postgres(pool: &PgPool, input: &CreateSessionInput) -> Result<Session> {
    let row = sqlx::query(
        r#"
        INSERT INTO session (name, duration_in_minutes)
        VALUES ($1, $2)
        RETURNING id, name, date, duration_in_minutes
        "#,
    )
    .bind(&input.name)
    .bind(input.duration_in_minutes)
    .fetch_one(pool)
    .await
    .context("Failed to insert session")?;

    row_to_session_postgres(&row)
}

async fn list_in_range_postgres(pool: &PgPool, range: &DateRange) -> Result<Vec<Session>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, date, duration_in_minutes
        FROM session
        WHERE date BETWEEN $1 AND $2
        ORDER BY date, id
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await
    .context("Failed to list sessions")?;

    rows.iter().map(row_to_session_postgres).collect()
}

async fn list_by_name_postgres(
    pool: &PgPool,
    name: &str,
    range: &DateRange,
) -> Result<Vec<Session>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, date, duration_in_minutes
        FROM session
        WHERE name = $1 AND date BETWEEN $2 AND $3
        ORDER BY date, id
        "#,
    )
    .bind(name)
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Failed to list sessions named {}", name))?;

    rows.iter().map(row_to_session_postgres).collect()
}

fn row_to_session_postgres(row: &sqlx::postgres::PgRow) -> Result<Session> {
    Ok(Session {
        id: i64::from(row.try_get::<i32, _>("id")?),
        name: row.try_get("name")?,
        date: row.try_get("date")?,
        duration_in_minutes: row
            .try_get::<Option<i32>, _>("duration_in_minutes")?
            .unwrap_or_default(),
    })
}
