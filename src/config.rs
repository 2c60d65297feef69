//! Workflow configuration
//!
//! All settings come from the process environment, read once at startup into
//! an explicit [`WorkflowConfig`] that is passed to the workflow. Library
//! code never mutates the environment; the demo binary builds this struct
//! directly instead of exporting variables.

use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_NATS_SUBJECT: &str = "touchpoints-created";

/// MySQL connection parameters.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub connect_timeout: Duration,
}

/// NATS connection and publish target.
#[derive(Debug, Clone)]
pub struct NatsConfig {
    pub url: String,
    pub subject: String,
    pub user: String,
    pub password: String,
}

/// Full configuration for one workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub database: DatabaseConfig,
    pub nats: NatsConfig,
    /// Display name of the corporate customer to provision touchpoints for.
    pub customer_name: String,
}

impl WorkflowConfig {
    /// Build the configuration from the process environment.
    ///
    /// Fails with a listing of every missing required variable so operators
    /// can fix them all in one pass.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Tests go through this to avoid process-global environment mutation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const REQUIRED: [&str; 8] = [
            "DB_HOST",
            "DB_NAME",
            "DB_USER",
            "DB_PASSWORD",
            "NATS_URL",
            "NATS_USER",
            "NATS_PASSWORD",
            "CUSTOMER_NAME",
        ];

        let missing: Vec<String> = REQUIRED
            .iter()
            .filter(|name| lookup(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars { names: missing });
        }

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "DB_PORT".into(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_DB_PORT,
        };

        // Required names were checked above; the unwraps cannot fire.
        let get = |name: &str| lookup(name).unwrap_or_default();

        Ok(Self {
            database: DatabaseConfig {
                host: get("DB_HOST"),
                port,
                name: get("DB_NAME"),
                user: get("DB_USER"),
                password: get("DB_PASSWORD"),
                connect_timeout: Duration::from_secs(30),
            },
            nats: NatsConfig {
                url: get("NATS_URL"),
                subject: lookup("NATS_SUBJECT")
                    .unwrap_or_else(|| DEFAULT_NATS_SUBJECT.to_string()),
                user: get("NATS_USER"),
                password: get("NATS_PASSWORD"),
            },
            customer_name: get("CUSTOMER_NAME"),
        })
    }
}
