//! Customer repository: read-only access to `corporate_customers`
//!
//! This workflow never writes customer rows; it resolves a customer by
//! display name and re-reads the row for the event snapshot.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::info;

use crate::error::StoreError;
use crate::models::{format_timestamp, CustomerRef, CustomerSnapshot};
use crate::workflow::CustomerStore;

#[derive(Clone)]
pub struct CustomerRepository {
    pool: MySqlPool,
}

impl CustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Look up a customer by exact display name.
    ///
    /// Name uniqueness is assumed; if duplicates exist the first row wins.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CustomerRef>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT id, name, subscription_tier
               FROM corporate_customers
               WHERE name = ?"#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| CustomerRef {
            id: row.get("id"),
            name: row.get("name"),
            subscription_tier: row.get("subscription_tier"),
        }))
    }

    /// Re-read the customer row for a fresh snapshot to embed in the event.
    pub async fn snapshot(&self, customer_id: &str) -> Result<Option<CustomerSnapshot>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT id, name, subscription_tier, created_at, updated_at
               FROM corporate_customers
               WHERE id = ?"#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| CustomerSnapshot {
            id: row.get("id"),
            name: row.get("name"),
            subscription_tier: row.get("subscription_tier"),
            created_at: row
                .get::<Option<chrono::NaiveDateTime>, _>("created_at")
                .map(format_timestamp),
            updated_at: row
                .get::<Option<chrono::NaiveDateTime>, _>("updated_at")
                .map(format_timestamp),
        }))
    }
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<CustomerRef>, StoreError> {
        let found = CustomerRepository::find_by_name(self, name).await?;
        if let Some(customer) = &found {
            info!(
                "Found customer: {} (ID: {}, Tier: {})",
                customer.name, customer.id, customer.subscription_tier
            );
        }
        Ok(found)
    }

    async fn snapshot(&self, customer_id: &str) -> Result<Option<CustomerSnapshot>, StoreError> {
        Ok(CustomerRepository::snapshot(self, customer_id).await?)
    }
}
