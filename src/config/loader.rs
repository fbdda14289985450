//! Load [`AppConfig`] from environment variables (and `.env` via dotenvy in the binary).

use crate::config::types::*;
use crate::error::ConfigError;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDR",
                message: e.to_string(),
            })?;
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                message: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        let cors_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(v) => parse_origins(&v),
            None => vec![DEFAULT_CORS_ORIGIN.to_string()],
        };
        let store = match get("TODO_STORE") {
            Some(v) => v.parse()?,
            None => StoreKind::default(),
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            cors_origins,
            store,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.cors_origins, vec![DEFAULT_CORS_ORIGIN.to_string()]);
        assert_eq!(cfg.store, StoreKind::Postgres);
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("DATABASE_URL", "postgres://db:5432/app"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("TODO_STORE", "Memory"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db:5432/app");
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(cfg.store, StoreKind::Memory);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = load(&[("BIND_ADDR", "  "), ("TODO_STORE", "")]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.store, StoreKind::Postgres);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = load(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn rejects_zero_connections() {
        let err = load(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn rejects_unknown_store() {
        let err = load(&[("TODO_STORE", "redis")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TODO_STORE", .. }));
    }
}
