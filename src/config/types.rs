//! Runtime configuration types.

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/todos";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Which [`TodoStore`](crate::store::TodoStore) backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(ConfigError::Invalid {
                key: "TODO_STORE",
                message: format!("{} (expected postgres or memory)", other),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: std::net::SocketAddr,
    pub max_connections: u32,
    /// Origins allowed for cross-origin requests.
    pub cors_origins: Vec<String>,
    pub store: StoreKind,
}
