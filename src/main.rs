//! Server binary: reads config from env (and `.env`), prepares the store, serves the todo API.

use std::sync::Arc;
use todo_service::{
    app, ensure_database_exists, ensure_todo_table, AppConfig, AppState, MemoryTodoStore, PgTodoStore,
    StoreKind, TodoStore,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_service=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store: Arc<dyn TodoStore> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_todo_table(&pool).await?;
            Arc::new(PgTodoStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; todos are lost on exit");
            Arc::new(MemoryTodoStore::new())
        }
    };

    let state = AppState::new(store);
    let router = app(state, &config.cors_origins);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
