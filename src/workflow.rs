//! The touchpoints provisioning workflow
//!
//! Four stages run in strict sequence: resolve the customer by name, insert
//! a touchpoints record, re-read the customer for the event snapshot, and
//! publish the touchpoints-created event. The first failing stage aborts the
//! run; there is no retry and no compensating action, so a record committed
//! before a failed publish stays in the datastore.

use async_trait::async_trait;
use tracing::{error, info};

use crate::config::WorkflowConfig;
use crate::database::{self, CustomerRepository, TouchpointsRepository};
use crate::error::{PublishError, StoreError, WorkflowError};
use crate::events::{NatsPublisher, TouchpointsCreatedEvent};
use crate::models::{CustomerRef, CustomerSnapshot};

/// Read-only access to corporate customers.
#[async_trait]
pub trait CustomerStore {
    /// Exact-name lookup; `None` means not found.
    async fn find_by_name(&self, name: &str) -> Result<Option<CustomerRef>, StoreError>;

    /// Fresh snapshot for the event payload; `None` if the row vanished.
    async fn snapshot(&self, customer_id: &str) -> Result<Option<CustomerSnapshot>, StoreError>;
}

/// Write access to touchpoints records.
#[async_trait]
pub trait TouchpointsStore {
    /// Insert a new record with all schedule fields unset; returns its id.
    async fn create(&self, customer_id: &str) -> Result<String, StoreError>;
}

/// Outbound notification channel.
#[async_trait]
pub trait EventPublisher {
    async fn publish(&self, event: &TouchpointsCreatedEvent) -> Result<(), PublishError>;
}

/// Identifiers produced by a successful run.
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub customer_id: String,
    pub touchpoints_id: String,
}

/// Drives the four stages over whatever store and publisher implementations
/// it is given.
pub struct TouchpointsWorkflow<C, T, P> {
    customers: C,
    touchpoints: T,
    publisher: P,
}

impl<C, T, P> TouchpointsWorkflow<C, T, P>
where
    C: CustomerStore,
    T: TouchpointsStore,
    P: EventPublisher,
{
    pub fn new(customers: C, touchpoints: T, publisher: P) -> Self {
        Self {
            customers,
            touchpoints,
            publisher,
        }
    }

    /// Run the workflow for one customer.
    pub async fn run(&self, customer_name: &str) -> Result<WorkflowOutcome, WorkflowError> {
        info!("Creating touchpoints for customer: {}", customer_name);

        // Stage 1: resolve the customer.
        let customer = self
            .customers
            .find_by_name(customer_name)
            .await
            .map_err(|source| WorkflowError::Store {
                stage: "customer lookup",
                source,
            })?
            .ok_or_else(|| WorkflowError::CustomerNotFound {
                name: customer_name.to_string(),
            })?;

        // Stage 2: create the touchpoints record.
        let touchpoints_id = self
            .touchpoints
            .create(&customer.id)
            .await
            .map_err(|source| WorkflowError::Store {
                stage: "touchpoints insert",
                source,
            })?;
        info!(
            "Created touchpoints record {} for customer {}",
            touchpoints_id, customer.id
        );

        // Stage 3: fresh customer snapshot for the event.
        let snapshot = self
            .customers
            .snapshot(&customer.id)
            .await
            .map_err(|source| WorkflowError::Store {
                stage: "customer snapshot",
                source,
            })?
            .ok_or_else(|| WorkflowError::CustomerVanished {
                customer_id: customer.id.clone(),
            })?;

        // Stage 4: publish. The record above is already committed; a failure
        // here leaves it in place.
        let event = TouchpointsCreatedEvent::new(&touchpoints_id, snapshot);
        self.publisher.publish(&event).await?;

        info!("Successfully created touchpoints and published event");
        Ok(WorkflowOutcome {
            customer_id: customer.id,
            touchpoints_id,
        })
    }
}

/// Wire the real MySQL repositories and NATS publisher from a configuration
/// and run the workflow once.
pub async fn run_provisioning(config: &WorkflowConfig) -> Result<WorkflowOutcome, WorkflowError> {
    let pool = database::connect_pool(&config.database)
        .await
        .map_err(|e| WorkflowError::Store {
            stage: "database connect",
            source: StoreError::Database(e),
        })?;

    let workflow = TouchpointsWorkflow::new(
        CustomerRepository::new(pool.clone()),
        TouchpointsRepository::new(pool.clone()),
        NatsPublisher::new(config.nats.clone()),
    );

    let result = workflow.run(&config.customer_name).await;
    pool.close().await;

    if let Err(e) = &result {
        error!("Workflow failed during {}: {}", e.stage(), e);
    }
    result
}
