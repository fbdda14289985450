//! Shared application state for all routes.

use crate::service::TodoService;
use crate::store::TodoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        AppState {
            todos: TodoService::new(store),
        }
    }
}
