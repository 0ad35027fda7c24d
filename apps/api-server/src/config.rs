//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::database::{DatabaseConfig, normalize_url};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db?mode=rwc";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

/// Value of `DATABASE_URL` that selects the process-local store.
const MEMORY_STORE: &str = "memory";

/// Where posts are kept.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Memory,
    Database(DatabaseConfig),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    /// Origins allowed to call the API from a browser. `*` allows any.
    pub frontend_origins: Vec<String>,
    /// Not used by any route; kept so deployments can set it.
    pub secret_key: String,
    pub debug: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup("DEBUG").map(|v| parse_flag(&v)).unwrap_or(false);

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let store = if database_url.trim().eq_ignore_ascii_case(MEMORY_STORE) {
            StoreConfig::Memory
        } else {
            StoreConfig::Database(DatabaseConfig {
                url: normalize_url(database_url.trim()),
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
            })
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());

        let log_format = match lookup("LOG_FORMAT").map(|v| v.to_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ if debug => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            store,
            frontend_origins: parse_origins(&frontend_url),
            secret_key: lookup("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
            debug,
            log_format,
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Split a comma separated origin list. Browsers send origins without a
/// trailing slash, so one is stripped here.
fn parse_origins(value: &str) -> Vec<String> {
    let origins: Vec<String> = value
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_FRONTEND_URL.to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.frontend_origins, vec![DEFAULT_FRONTEND_URL]);
        assert!(!config.debug);
        assert!(config.uses_default_secret());
        assert_eq!(config.log_format, LogFormat::Json);
        match config.store {
            StoreConfig::Database(db) => assert_eq!(db.url, DEFAULT_DATABASE_URL),
            StoreConfig::Memory => panic!("expected database store"),
        }
    }

    #[test]
    fn postgres_scheme_is_rewritten() {
        let config = config_from(&[("DATABASE_URL", "postgres://u:p@db/blog")]);
        match config.store {
            StoreConfig::Database(db) => assert_eq!(db.url, "postgresql://u:p@db/blog"),
            StoreConfig::Memory => panic!("expected database store"),
        }
    }

    #[test]
    fn memory_store_is_selectable() {
        let config = config_from(&[("DATABASE_URL", "memory")]);
        assert!(matches!(config.store, StoreConfig::Memory));
    }

    #[test]
    fn frontend_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "FRONTEND_URL",
            "https://blog.example.com/, http://localhost:3000",
        )]);
        assert_eq!(
            config.frontend_origins,
            vec!["https://blog.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn debug_flag_selects_pretty_logs() {
        let config = config_from(&[("DEBUG", "true"), ("PORT", "8080")]);
        assert!(config.debug);
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Pretty);

        let config = config_from(&[("DEBUG", "1"), ("LOG_FORMAT", "json")]);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 5000);
    }
}
