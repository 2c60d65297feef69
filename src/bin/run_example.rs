//! Demo wrapper: runs the workflow against a local development stack with an
//! explicitly constructed configuration instead of exported environment
//! variables.
//!
//! Expects the development MySQL and NATS containers to be up; see the
//! README for the ports they listen on.

use std::process;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use touchpoints::config::{DatabaseConfig, NatsConfig, WorkflowConfig};
use touchpoints::run_provisioning;

fn example_config() -> WorkflowConfig {
    WorkflowConfig {
        database: DatabaseConfig {
            host: "localhost".into(),
            port: 33006,
            name: "bassline-boogie".into(),
            user: "bassline-boogie-user".into(),
            password: "8Qd8*yZK&zIxS%!s".into(),
            connect_timeout: Duration::from_secs(30),
        },
        nats: NatsConfig {
            url: "nats://localhost:40953".into(),
            subject: "touchpoints-created".into(),
            user: "admin".into(),
            password: "admin".into(),
        },
        customer_name: "Example Tech Solutions".into(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Creating touchpoints for customer...");

    match run_provisioning(&example_config()).await {
        Ok(outcome) => {
            println!(
                "Touchpoints created successfully (record {})",
                outcome.touchpoints_id
            );
        }
        Err(e) => {
            eprintln!("Failed to create touchpoints: {e}");
            process::exit(1);
        }
    }
}
