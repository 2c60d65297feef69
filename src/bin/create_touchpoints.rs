//! Production entry point: provision touchpoints for the customer named in
//! the environment and publish the touchpoints-created event.
//!
//! Exits 0 on full success, 1 on any configuration, datastore, or bus
//! failure.

use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use touchpoints::{run_provisioning, WorkflowConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Validate configuration before any external connection is attempted.
    let config = match WorkflowConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    match run_provisioning(&config).await {
        Ok(outcome) => {
            info!(
                "Touchpoints creation completed successfully (record {})",
                outcome.touchpoints_id
            );
        }
        Err(_) => {
            // Cause already logged at the failing stage.
            error!("Touchpoints creation failed");
            process::exit(1);
        }
    }
}
