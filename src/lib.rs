//! Todo service: CRUD REST backend for a single todo resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError, StartupError};
pub use model::{Todo, TodoCreateRequest, TodoResponse, TodoUpdate};
pub use routes::{app, common_routes, todo_routes};
pub use service::TodoService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_todo_table, MemoryTodoStore, PgTodoStore, TodoStore};
