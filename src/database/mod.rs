//! Database connection management
//!
//! Builds the MySQL connection pool the repositories run their queries on.
//! Each query checks a connection out of the pool and returns it when the
//! query completes, so no connection is held across workflow stages.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

use crate::config::DatabaseConfig;

pub(crate) mod customer_repository;
pub(crate) mod touchpoints_repository;

pub use customer_repository::CustomerRepository;
pub use touchpoints_repository::TouchpointsRepository;

/// Connect a pool using the given configuration.
///
/// Connection parameters go through the options builder rather than a URL so
/// credentials never need percent-encoding.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    info!(
        "Connecting to database {} at {}:{}",
        config.name, config.host, config.port
    );

    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password);

    let pool = MySqlPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options)
        .await
        .map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            e
        })?;

    Ok(pool)
}
