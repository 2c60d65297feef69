//! NATS publisher for touchpoints events
//!
//! The connection is scoped to a single publish: connect with credentials,
//! publish, flush, and drop. Only one event goes out per workflow run, so
//! holding a client open buys nothing.

use async_trait::async_trait;
use tracing::info;

use crate::config::NatsConfig;
use crate::error::PublishError;
use crate::events::types::TouchpointsCreatedEvent;
use crate::workflow::EventPublisher;

pub struct NatsPublisher {
    config: NatsConfig,
}

impl NatsPublisher {
    pub fn new(config: NatsConfig) -> Self {
        Self { config }
    }

    /// Publish one event to the configured subject.
    ///
    /// The payload is pretty-printed JSON for the benefit of humans tailing
    /// the subject.
    pub async fn publish(&self, event: &TouchpointsCreatedEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_vec_pretty(event)?;

        let client = async_nats::ConnectOptions::with_user_and_password(
            self.config.user.clone(),
            self.config.password.clone(),
        )
        .connect(&self.config.url)
        .await
        .map_err(|e| PublishError::Connect(e.to_string()))?;

        client
            .publish(self.config.subject.clone(), payload.into())
            .await
            .map_err(|e| PublishError::Publish(e.to_string()))?;

        client
            .flush()
            .await
            .map_err(|e| PublishError::Publish(e.to_string()))?;

        info!(
            "Published {} event for touchpoints {}",
            self.config.subject, event.touchpoints_id
        );
        Ok(())
    }
}

#[async_trait]
impl EventPublisher for NatsPublisher {
    async fn publish(&self, event: &TouchpointsCreatedEvent) -> Result<(), PublishError> {
        NatsPublisher::publish(self, event).await
    }
}
