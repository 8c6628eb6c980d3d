//! Todo table DDL, seed data, and single-statement CRUD.

use crate::error::AppError;
use crate::model::{TodoItem, TodoPayload};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Rows inserted when the table is first created.
const SEED_ROWS: &[(i64, &str)] = &[
    (1, "Do this"),
    (2, "Do that"),
    (3, "Do something else"),
];

/// Storage adapter for the `Todo` table. Cloning shares the pool.
#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if missing.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(database_url)
            .map_err(AppError::Db)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `Todo` table and seed it when the database is fresh.
    /// Idempotent: once the table exists, both the DDL and the seed are
    /// skipped, so restarts never duplicate or resurrect seed rows.
    pub async fn initialize(&self) -> Result<(), AppError> {
        let existing: Option<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'Todo'",
        )
        .fetch_optional(&self.pool)
        .await?;
        if existing.is_some() {
            return Ok(());
        }

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Todo (
                Id INTEGER PRIMARY KEY AUTOINCREMENT,
                Item TEXT,
                Complete BOOLEAN NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // OR IGNORE: a concurrently-starting instance may have seeded between
        // our existence check and this insert.
        for (id, item) in SEED_ROWS {
            sqlx::query("INSERT OR IGNORE INTO Todo (Id, Item, Complete) VALUES (?, ?, 0)")
                .bind(*id)
                .bind(*item)
                .execute(&self.pool)
                .await?;
        }
        tracing::info!(rows = SEED_ROWS.len(), "created Todo table and seeded");
        Ok(())
    }

    /// Every row, in whatever order SQLite returns them.
    pub async fn list_all(&self) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query_as::<_, TodoItem>("SELECT Id, Item, Complete FROM Todo")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Point lookup by primary key.
    pub async fn get(&self, id: i64) -> Result<Option<TodoItem>, AppError> {
        let row =
            sqlx::query_as::<_, TodoItem>("SELECT Id, Item, Complete FROM Todo WHERE Id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    /// Insert one row; the store assigns the id.
    pub async fn create(&self, payload: &TodoPayload) -> Result<TodoItem, AppError> {
        let row = sqlx::query_as::<_, TodoItem>(
            "INSERT INTO Todo (Item, Complete) VALUES (?, ?) RETURNING Id, Item, Complete",
        )
        .bind(payload.item.as_deref())
        .bind(payload.complete)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite `Item` and `Complete` for one row. Returns `None` when no
    /// row matched.
    pub async fn update(
        &self,
        id: i64,
        payload: &TodoPayload,
    ) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query_as::<_, TodoItem>(
            "UPDATE Todo SET Item = ?, Complete = ? WHERE Id = ? RETURNING Id, Item, Complete",
        )
        .bind(payload.item.as_deref())
        .bind(payload.complete)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Remove one row. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM Todo WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
