//! Environment configuration.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const APP_NAME: &str = "SeniorEase";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("SENIOREASE_PORT", "8000"),
            database_path: try_load("SENIOREASE_DB", "seniorease.db"),
            uploads_dir: try_load("SENIOREASE_UPLOADS", "uploads"),
        }
    }
}

/// Read `key` from the environment, falling back to `default`.
///
/// A value that does not parse aborts startup; running on a half-read
/// configuration is worse than not starting.
fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            tracing::info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            tracing::warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
