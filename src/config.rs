// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got `{value}`")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings, read once from `BLOCKESTATE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    /// `None` skips seeding.
    pub seed_path: Option<String>,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "blockestate.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_path: Some("sql/seed.sql".to_string()),
            workers: 8,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an injectable source, so tests don't touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Config::default();

        if let Some(raw) = lookup("BLOCKESTATE_ADDR") {
            cfg.addr = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "BLOCKESTATE_ADDR",
                expected: "a socket address like 127.0.0.1:3000",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup("BLOCKESTATE_DB") {
            cfg.db_path = raw;
        }
        if let Some(raw) = lookup("BLOCKESTATE_SCHEMA") {
            cfg.schema_path = raw;
        }
        if let Some(raw) = lookup("BLOCKESTATE_SEED") {
            cfg.seed_path = Some(raw).filter(|s| !s.trim().is_empty());
        }
        if let Some(raw) = lookup("BLOCKESTATE_WORKERS") {
            cfg.workers = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "BLOCKESTATE_WORKERS",
                    expected: "a positive integer",
                    value: raw.clone(),
                })?;
        }

        Ok(cfg)
    }
}
