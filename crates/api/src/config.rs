use std::str::FromStr;

/// Where to-do items are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL via `DATABASE_URL` (default).
    Postgres,
    /// Process memory; everything is lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid {
                var: "STORAGE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for background jobs, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Delay between the end of one past-due sweep and the start of the next,
    /// in seconds (default: `5`).
    pub sweep_interval_secs: u64,
    /// Storage backend (default: `postgres`).
    pub storage_backend: StorageBackend,
    /// PostgreSQL connection string. Required for the postgres backend.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `SWEEP_INTERVAL_SECS`   | `5`                     |
    /// | `STORAGE_BACKEND`       | `postgres`              |
    /// | `DATABASE_URL`          | (required for postgres) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = parse_or(&lookup, "PORT", 3000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let shutdown_timeout_secs: u64 = parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30)?;

        let sweep_interval_secs: u64 = parse_or(&lookup, "SWEEP_INTERVAL_SECS", 5)?;
        if sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "SWEEP_INTERVAL_SECS",
                value: "0".into(),
            });
        }

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            sweep_interval_secs,
            storage_backend,
            database_url,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var,
                value: value.clone(),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_with_memory_backend() {
        let config = config_from(&[("STORAGE_BACKEND", "memory")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.sweep_interval_secs, 5);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        assert_matches!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));

        let config = config_from(&[("DATABASE_URL", "postgres://localhost/todos")]).unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("PORT", "8080"),
            ("SWEEP_INTERVAL_SECS", "60"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.sweep_interval_secs, 60);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_matches!(
            config_from(&[("STORAGE_BACKEND", "memory"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        );
        assert_matches!(
            config_from(&[("STORAGE_BACKEND", "memory"), ("SWEEP_INTERVAL_SECS", "0")]),
            Err(ConfigError::Invalid { var: "SWEEP_INTERVAL_SECS", .. })
        );
        assert_matches!(
            config_from(&[("STORAGE_BACKEND", "redis")]),
            Err(ConfigError::Invalid { var: "STORAGE_BACKEND", .. })
        );
    }
}
