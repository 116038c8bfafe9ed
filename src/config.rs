use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::utils::password::HashParams;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_USERS_FILE: &str = "users.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} not set")]
    Missing(&'static str),
    #[error("Environment variable {var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub users_file: PathBuf,
    pub hash: HashParams,
}

impl EnvConfig {
    fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::Missing(key)),
        }
    }

    fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match lookup(key) {
            Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var: key,
                reason: e.to_string(),
            }),
            None => Ok(default),
        }
    }

    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Without a signing secret nothing else matters.
        let jwt_secret = Self::required(&lookup, "JWT_SECRET")?;

        let defaults = HashParams::default();
        let hash = HashParams {
            memory_kib: Self::parsed(&lookup, "HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: Self::parsed(&lookup, "HASH_ITERATIONS", defaults.iterations)?,
            parallelism: Self::parsed(&lookup, "HASH_PARALLELISM", defaults.parallelism)?,
        };
        hash.validate().map_err(|e| ConfigError::Invalid {
            var: "HASH_*",
            reason: e.to_string(),
        })?;

        Ok(EnvConfig {
            port: Self::parsed(&lookup, "PORT", DEFAULT_PORT)?,
            jwt_secret,
            users_file: lookup("USERS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_FILE)),
            hash,
        })
    }
}
