//! Application configuration.
//!
//! Configuration is read once at startup from environment variables, or from
//! a specific `.env`-style file, into an [`AppConfig`] that is then passed by
//! reference to whatever needs it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Host the HTTP server binds to.
pub const ENV_HTTP_HOST: &str = "DOGS_HTTP_HOST";
/// Port the HTTP server binds to.
pub const ENV_HTTP_PORT: &str = "DOGS_HTTP_PORT";
/// `SQLite` connection URL.
pub const ENV_DATABASE_URL: &str = "DOGS_DATABASE_URL";
/// Upper bound on pooled database connections.
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "DOGS_DATABASE_MAX_CONNECTIONS";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dogs.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The env file could not be read or parsed.
    #[error("Failed to read env file {path}: {reason}")]
    EnvFile { path: PathBuf, reason: String },

    /// A variable was present but could not be parsed.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Store connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `SQLite` URL, e.g. `sqlite://data/dogs.db` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// In-memory config, used by tests that don't need a file on disk.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    /// Whether the URL points at a per-connection in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a specific env file.
    ///
    /// The process environment is not modified. Keys missing from the file
    /// fall back to the process environment, then to defaults.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let env_file_error = |e: dotenvy::Error| ConfigError::EnvFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
            let (key, value) = item.map_err(env_file_error)?;
            vars.insert(key, value);
        }

        tracing::debug!(
            target: "dogs.config",
            path = %path.display(),
            keys = vars.len(),
            "Loaded env file"
        );

        Self::from_lookup(|key| vars.get(key).cloned().or_else(|| std::env::var(key).ok()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let http = HttpConfig {
            host: lookup(ENV_HTTP_HOST).unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string()),
            port: parse_or(&lookup, ENV_HTTP_PORT, DEFAULT_HTTP_PORT)?,
        };

        let database = DatabaseConfig {
            url: lookup(ENV_DATABASE_URL).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(
                &lookup,
                ENV_DATABASE_MAX_CONNECTIONS,
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        Ok(Self { http, database })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_HTTP_HOST, "127.0.0.1"),
            (ENV_HTTP_PORT, "8081"),
            (ENV_DATABASE_URL, "sqlite::memory:"),
            (ENV_DATABASE_MAX_CONNECTIONS, "2"),
        ]))
        .unwrap();

        assert_eq!(config.http.bind_addr(), "127.0.0.1:8081");
        assert!(config.database.is_in_memory());
        assert_eq!(config.database.max_connections, 2);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_HTTP_PORT, "eighty")])).unwrap_err();

        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, ENV_HTTP_PORT);
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_env_file_reads_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{ENV_DATABASE_URL}=sqlite://from-file.db").unwrap();
        writeln!(file, "{ENV_HTTP_PORT}=4040").unwrap();

        let config = AppConfig::from_env_file(file.path()).unwrap();

        assert_eq!(config.database.url, "sqlite://from-file.db");
        assert_eq!(config.http.port, 4040);
    }

    #[test]
    fn test_from_env_file_missing_file_errors() {
        let err = AppConfig::from_env_file(Path::new("/nonexistent/.int.env")).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }

    #[test]
    fn test_file_backed_url_is_not_in_memory() {
        let db = DatabaseConfig {
            url: "sqlite://dogs.db".to_string(),
            max_connections: 5,
        };
        assert!(!db.is_in_memory());
        assert!(DatabaseConfig::in_memory().is_in_memory());
    }
}
