//! Event payloads and the NATS publisher.

pub mod publisher;
pub mod types;

pub use publisher::NatsPublisher;
pub use types::{TouchpointSchedule, TouchpointsCreatedEvent, EVENT_TYPE};
