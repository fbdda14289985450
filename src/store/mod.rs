//! Todo persistence: a storage interface keyed by the store-assigned id, plus
//! PostgreSQL and in-memory implementations.

mod memory;
mod postgres;

pub use memory::MemoryTodoStore;
pub use postgres::{ensure_database_exists, ensure_todo_table, PgTodoStore, TODO_TABLE};

use crate::error::AppError;
use crate::model::Todo;
use async_trait::async_trait;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every stored todo, ascending by id.
    async fn find_all(&self) -> Result<Vec<Todo>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError>;

    /// Insert when `todo.id` is `None` (the store assigns the id), otherwise
    /// overwrite the row with that id. Returns the stored state.
    async fn save(&self, todo: Todo) -> Result<Todo, AppError>;

    /// Remove the row for `todo.id`. An unsaved todo is a no-op.
    async fn delete(&self, todo: &Todo) -> Result<(), AppError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
