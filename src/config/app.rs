//! Process configuration read from environment variables.

use crate::error::ConfigError;
use regex::Regex;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tutorials";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Which store backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Schema holding the `tutorials` table. Plain identifier only.
    pub schema: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
    pub store: StoreKind,
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let schema = lookup("TUTORIALS_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        validate_identifier("TUTORIALS_SCHEMA", &schema)?;

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: format!("'{}': {}", bind_raw, e),
        })?;

        let max_connections = parse_number("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }
        let body_limit_bytes = parse_number("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?;

        let store = match lookup("TUTORIALS_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "TUTORIALS_STORE",
                    reason: format!("unknown store '{}' (expected postgres or memory)", other),
                })
            }
        };

        Ok(AppConfig {
            database_url,
            schema,
            bind_addr,
            max_connections,
            body_limit_bytes,
            store,
        })
    }
}

fn parse_number<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: format!("'{}': {}", s, e),
        }),
    }
}

fn validate_identifier(var: &'static str, value: &str) -> Result<(), ConfigError> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })?;
    if re.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            var,
            reason: format!("'{}' is not a plain SQL identifier", value),
        })
    }
}
