//! Todo entity and the request/response shapes used at the HTTP boundary.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Persisted todo. `id` is `None` until the store assigns one on first save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// New unsaved todo; `completed` starts false.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Todo {
            id: None,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Overwrite the mutable fields. The id is left untouched.
    pub fn apply(&mut self, update: TodoUpdate) {
        self.title = update.title;
        self.description = update.description;
        self.completed = update.completed;
    }
}

/// Body of POST /todos. Any `id` in the body is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct TodoCreateRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoCreateRequest {
    /// Missing or null fields are rejected with 422 rather than stored as null,
    /// so a row never holds a null title or description.
    pub const REQUIRED: &'static [&'static str] = &["title", "description"];

    pub fn into_todo(self) -> Todo {
        Todo {
            completed: self.completed,
            ..Todo::new(self.title, self.description)
        }
    }
}

/// Body of PUT /todos/:id. Full replacement of the mutable fields; an `id` key is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct TodoUpdate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoUpdate {
    pub const REQUIRED: &'static [&'static str] = &["title", "description"];
}

/// Response of POST /todos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TryFrom<Todo> for TodoResponse {
    type Error = AppError;

    fn try_from(todo: Todo) -> Result<Self, Self::Error> {
        let id = todo
            .id
            .ok_or_else(|| AppError::Internal("store returned a todo without an id".into()))?;
        Ok(TodoResponse {
            id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_ignores_client_id() {
        let req: TodoCreateRequest =
            serde_json::from_str(r#"{"id":99,"title":"Buy milk","description":"2%","completed":false}"#).unwrap();
        let todo = req.into_todo();
        assert_eq!(todo.id, None);
        assert_eq!(todo.title, "Buy milk");
    }

    #[test]
    fn create_request_defaults_completed_to_false() {
        let req: TodoCreateRequest = serde_json::from_str(r#"{"title":"a","description":"b"}"#).unwrap();
        assert!(!req.completed);
    }

    #[test]
    fn apply_keeps_id() {
        let mut todo = Todo {
            id: Some(4),
            ..Todo::new("old", "old")
        };
        todo.apply(TodoUpdate {
            title: "new".into(),
            description: "desc".into(),
            completed: true,
        });
        assert_eq!(todo.id, Some(4));
        assert_eq!(todo.title, "new");
        assert_eq!(todo.description, "desc");
        assert!(todo.completed);
    }

    #[test]
    fn response_requires_an_id() {
        assert!(TodoResponse::try_from(Todo::new("a", "b")).is_err());
        let resp = TodoResponse::try_from(Todo {
            id: Some(1),
            ..Todo::new("a", "b")
        })
        .unwrap();
        assert_eq!(resp.id, 1);
    }

    #[test]
    fn response_serializes_all_fields() {
        let resp = TodoResponse {
            id: 1,
            title: "Buy milk".into(),
            description: "2%".into(),
            completed: false,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Buy milk", "description": "2%", "completed": false})
        );
    }
}
