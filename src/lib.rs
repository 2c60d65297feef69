//! Touchpoints provisioning for corporate customers
//!
//! A single linear workflow: look up a corporate customer by display name,
//! insert a touchpoints record with all engagement dates unset, re-read the
//! customer for a consistent snapshot, and publish a `touchpoints-created`
//! event to NATS for downstream processing.
//!
//! Configuration comes from the process environment (see
//! [`config::WorkflowConfig::from_env`]):
//!
//! - `DB_HOST`, `DB_PORT` (default 3306), `DB_NAME`, `DB_USER`,
//!   `DB_PASSWORD` — MySQL connection
//! - `NATS_URL`, `NATS_SUBJECT` (default `touchpoints-created`),
//!   `NATS_USER`, `NATS_PASSWORD` — message bus
//! - `CUSTOMER_NAME` — display name of the customer to provision

pub mod config;
pub mod database;
pub mod error;
pub mod events;
pub mod models;
pub mod workflow;

pub use config::WorkflowConfig;
pub use error::WorkflowError;
pub use workflow::{run_provisioning, TouchpointsWorkflow, WorkflowOutcome};
