//! Todo operations over a [`TodoStore`].

use crate::error::AppError;
use crate::model::{Todo, TodoUpdate};
use crate::store::TodoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        TodoService { store }
    }

    pub fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }

    pub async fn get_todos(&self) -> Result<Vec<Todo>, AppError> {
        self.store.find_all().await
    }

    /// `Ok(None)` when no todo has this id.
    pub async fn get_todo_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        self.store.find_by_id(id).await
    }

    pub async fn create_todo(&self, todo: Todo) -> Result<Todo, AppError> {
        let created = self.store.save(todo).await?;
        tracing::debug!(id = ?created.id, "todo created");
        Ok(created)
    }

    /// Read-modify-write without isolation: a concurrent update of the same id
    /// may be overwritten. `Ok(None)` when no todo has this id.
    pub async fn update_todo(&self, id: i64, update: TodoUpdate) -> Result<Option<Todo>, AppError> {
        let Some(mut todo) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };
        todo.apply(update);
        let saved = self.store.save(todo).await?;
        tracing::debug!(id, "todo updated");
        Ok(Some(saved))
    }

    /// Fails with [`AppError::NoSuchElement`] when no todo has this id.
    pub async fn delete_todo(&self, id: i64) -> Result<(), AppError> {
        let todo = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NoSuchElement("Todo not found".into()))?;
        self.store.delete(&todo).await?;
        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}
