//! Error handling for the touchpoints provisioning workflow
//!
//! Each stage of the workflow reports failure through a small closed set of
//! typed errors; no client-library error escapes a stage boundary unwrapped.

use thiserror::Error;

/// Top-level outcome type for the workflow driver.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Customer '{name}' not found in database")]
    CustomerNotFound { name: String },

    #[error("Customer {customer_id} no longer present when building event snapshot")]
    CustomerVanished { customer_id: String },

    #[error("Datastore error during {stage}: {source}")]
    Store {
        stage: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Event publish error: {0}")]
    Publish(#[from] PublishError),
}

/// Configuration errors, detected before any external connection is opened.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", names.join(", "))]
    MissingVars { names: Vec<String> },

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Datastore errors surfaced by a store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Connection-level failure reported by a non-sqlx backend.
    #[error("Datastore unavailable: {0}")]
    Unavailable(String),
}

/// Message-bus errors surfaced by a publisher implementation.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Bus connection failed: {0}")]
    Connect(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Event serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WorkflowError {
    /// Stage label used in log lines, mirroring the four workflow stages.
    pub fn stage(&self) -> &'static str {
        match self {
            WorkflowError::Config(_) => "configuration",
            WorkflowError::CustomerNotFound { .. } => "customer lookup",
            WorkflowError::Store { stage, .. } => stage,
            WorkflowError::CustomerVanished { .. } => "customer snapshot",
            WorkflowError::Publish(_) => "event publish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vars_lists_every_name() {
        let err = ConfigError::MissingVars {
            names: vec!["DB_HOST".into(), "NATS_URL".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("DB_HOST"));
        assert!(msg.contains("NATS_URL"));
    }

    #[test]
    fn workflow_error_reports_failing_stage() {
        let err = WorkflowError::Store {
            stage: "touchpoints insert",
            source: StoreError::Unavailable("connection reset".into()),
        };
        assert_eq!(err.stage(), "touchpoints insert");
        assert!(err.to_string().contains("touchpoints insert"));
    }
}
