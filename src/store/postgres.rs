//! PostgreSQL-backed store and database bootstrap.

use super::TodoStore;
use crate::error::{AppError, ConfigError, StartupError};
use crate::model::Todo;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const TODO_TABLE: &str = "todo";

const COLUMNS: &str = "id, title, description, completed";

/// Create the `todo` table if it does not exist.
pub async fn ensure_todo_table(pool: &PgPool) -> Result<(), StartupError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
        TODO_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        PgTodoStore { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, TODO_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Todo>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, TODO_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, todo: Todo) -> Result<Todo, AppError> {
        match todo.id {
            None => {
                let sql = format!(
                    "INSERT INTO {} (title, description, completed) VALUES ($1, $2, $3) RETURNING {}",
                    TODO_TABLE, COLUMNS
                );
                tracing::debug!(sql = %sql, "query");
                let row = sqlx::query_as::<_, Todo>(&sql)
                    .bind(&todo.title)
                    .bind(&todo.description)
                    .bind(todo.completed)
                    .fetch_one(&self.pool)
                    .await?;
                Ok(row)
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE {} SET title = $1, description = $2, completed = $3 WHERE id = $4 RETURNING {}",
                    TODO_TABLE, COLUMNS
                );
                tracing::debug!(sql = %sql, id, "query");
                // A row deleted between lookup and save surfaces as RowNotFound.
                let row = sqlx::query_as::<_, Todo>(&sql)
                    .bind(&todo.title)
                    .bind(&todo.description)
                    .bind(todo.completed)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?;
                Ok(row)
            }
        }
    }

    async fn delete(&self, todo: &Todo) -> Result<(), AppError> {
        let Some(id) = todo.id else {
            return Ok(());
        };
        let sql = format!("DELETE FROM {} WHERE id = $1", TODO_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database named in `database_url` exists; create it if not. Connects to the
/// `postgres` maintenance database on the same server to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StartupError> {
    let (admin, db_name) = admin_connect_options(database_url)?;
    let Some(db_name) = db_name.filter(|n| n != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` database on the server in `url`, plus the database `url` names.
fn admin_connect_options(url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        message: e.to_string(),
    })?;
    let db_name = opts.get_database().map(str::to_string).filter(|n| !n.is_empty());
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
