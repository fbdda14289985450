//! In-process store used by tests and `TODO_STORE=memory` runs.

use super::TodoStore;
use crate::error::AppError;
use crate::model::Todo;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

#[derive(Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut todo: Todo) -> Result<Todo, AppError> {
        let mut inner = self.inner.write().await;
        let id = match todo.id {
            Some(id) if inner.rows.contains_key(&id) => id,
            Some(_) => return Err(AppError::Db(sqlx::Error::RowNotFound)),
            None => {
                inner.last_id += 1;
                inner.last_id
            }
        };
        todo.id = Some(id);
        inner.rows.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, todo: &Todo) -> Result<(), AppError> {
        if let Some(id) = todo.id {
            self.inner.write().await.rows.remove(&id);
        }
        Ok(())
    }
}
