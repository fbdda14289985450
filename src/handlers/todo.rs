//! Todo CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{TodoCreateRequest, TodoResponse, TodoUpdate};
use crate::response::{success_created, success_ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let todos = state.todos.get_todos().await?;
    Ok(success_ok(todos))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let todo = state
        .todos
        .get_todo_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))?;
    Ok(success_ok(todo))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let req: TodoCreateRequest = RequestValidator::parse(body, TodoCreateRequest::REQUIRED)?;
    let created = state.todos.create_todo(req.into_todo()).await?;
    Ok(success_created(TodoResponse::try_from(created)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let update: TodoUpdate = RequestValidator::parse(body, TodoUpdate::REQUIRED)?;
    let todo = state
        .todos
        .update_todo(id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("todo {}", id)))?;
    Ok(success_ok(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.todos.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_integer_ids() {
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::BadRequest(_))));
    }
}
