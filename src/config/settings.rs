//! Runtime settings read from the environment (a `.env` file is loaded by the binary first).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Mount `/apispec.json` and the `/apidocs` UI.
    pub api_docs: bool,
    pub body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let bind_addr: SocketAddr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.to_string())?
            .parse()
            .map_err(|_| invalid("BIND_ADDR", &lookup))?;
        let api_docs = match lookup("API_DOCS") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidValue {
                var: "API_DOCS",
                value: v,
            })?,
            None => true,
        };
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES)?;

        Ok(Settings {
            database_url,
            max_connections,
            bind_addr,
            api_docs,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue { var, value: v }),
        None => Ok(default),
    }
}

fn invalid<F>(var: &'static str, lookup: &F) -> ConfigError
where
    F: Fn(&str) -> Option<String>,
{
    ConfigError::InvalidValue {
        var,
        value: lookup(var).unwrap_or_default(),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
