//! Configuration management for the quiz master
//!
//! Database settings come from `DB_*` environment variables, optionally
//! loaded from a `.env` file, and can be overridden on the command line.

use crate::{cli::Args, error::QuizError};
use serde::{Deserialize, Serialize};
use std::env;

/// The only driver this build can open
pub const SQLITE_DRIVER: &str = "sqlite";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Backing store configuration
    pub database: DatabaseConfig,
}

/// Backing store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database driver (`DB_DRIVER`)
    pub driver: String,
    /// User name (`DB_USER`)
    pub user: Option<String>,
    /// Password (`DB_PASS`)
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Host (`DB_HOST`)
    pub host: String,
    /// Port (`DB_PORT`)
    pub port: Option<u16>,
    /// Database name (`DB_NAME`); the file path for SQLite
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: SQLITE_DRIVER.to_string(),
            user: None,
            password: None,
            host: "localhost".to_string(),
            port: None,
            name: "quiz_master.db".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset or
    /// empty values
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("DB_PORT") {
            Some(raw) => Some(raw.parse::<u16>().map_err(|e| QuizError::Config {
                message: format!("DB_PORT must be a port number, got {raw:?}"),
                source: Some(Box::new(e)),
            })?),
            None => None,
        };

        Ok(Self {
            driver: get("DB_DRIVER").unwrap_or(defaults.driver),
            user: get("DB_USER"),
            password: get("DB_PASS"),
            host: get("DB_HOST").unwrap_or(defaults.host),
            port,
            name: get("DB_NAME").unwrap_or(defaults.name),
        })
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), QuizError> {
        if !self.driver.eq_ignore_ascii_case(SQLITE_DRIVER) {
            return Err(QuizError::config(format!(
                "unsupported database driver '{}', only '{SQLITE_DRIVER}' is available",
                self.driver
            )));
        }

        if self.name.trim().is_empty() {
            return Err(QuizError::config("database name must not be empty"));
        }

        Ok(())
    }

    /// Connection description for logs, password redacted
    pub fn dsn(&self) -> String {
        let auth = match (&self.user, &self.password) {
            (Some(user), Some(_)) => format!("{user}:***@"),
            (Some(user), None) => format!("{user}@"),
            _ => String::new(),
        };
        let port = self.port.map(|p| format!(":{p}")).unwrap_or_default();
        format!("{}://{auth}{}{port}/{}", self.driver, self.host, self.name)
    }
}

impl Config {
    /// Create configuration from the environment and command line arguments
    pub fn from_args(args: &Args) -> Result<Self, QuizError> {
        let mut database = DatabaseConfig::from_env()?;
        if let Some(path) = &args.database {
            database.name = path.clone();
        }

        let config = Self {
            debug: args.debug,
            database,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), QuizError> {
        self.database.validate()
    }
}
