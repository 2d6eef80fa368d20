use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::upload::orchestrator::BatchLimits;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub min_files: usize,
    pub max_files: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        let limits = BatchLimits::default();
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            upload_dir: PathBuf::from("uploads"),
            min_files: limits.min_files,
            max_files: limits.max_files,
            max_upload_bytes: 100 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            min_files: env_or("MIN_FILES", defaults.min_files)?,
            max_files: env_or("MAX_FILES", defaults.max_files)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_files == 0 {
            bail!("MIN_FILES must be at least 1");
        }
        if self.min_files > self.max_files {
            bail!(
                "MIN_FILES ({}) must not exceed MAX_FILES ({})",
                self.min_files,
                self.max_files
            );
        }
        Ok(())
    }

    pub fn batch_limits(&self) -> BatchLimits {
        BatchLimits {
            min_files: self.min_files,
            max_files: self.max_files,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.batch_limits(), BatchLimits::default());
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let config = Config {
            min_files: 30,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let config = Config {
            min_files: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_or_parses_and_reports_key() {
        std::env::set_var("RANKER_TEST_PORT_OK", "9090");
        assert_eq!(env_or::<u16>("RANKER_TEST_PORT_OK", 1).unwrap(), 9090);

        std::env::set_var("RANKER_TEST_PORT_BAD", "not-a-port");
        let err = env_or::<u16>("RANKER_TEST_PORT_BAD", 1).unwrap_err();
        assert!(err.to_string().contains("RANKER_TEST_PORT_BAD"));

        assert_eq!(env_or::<u16>("RANKER_TEST_PORT_UNSET", 7).unwrap(), 7);
    }
}
