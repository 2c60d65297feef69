//! Touchpoints repository: insert and read back `touchpoints` rows

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::TouchpointsRecord;
use crate::workflow::TouchpointsStore;

#[derive(Clone)]
pub struct TouchpointsRepository {
    pool: MySqlPool,
}

impl TouchpointsRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new touchpoints record for the customer.
    ///
    /// The id is a freshly generated v4 UUID; all four schedule fields start
    /// NULL. Returns the new id.
    pub async fn create(&self, customer_id: &str) -> Result<String, sqlx::Error> {
        let touchpoints_id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"INSERT INTO touchpoints (id, customer_id, welcome_outreach, technical_onboarding,
                                        follow_up_call, feedback_session)
               VALUES (?, ?, NULL, NULL, NULL, NULL)"#,
        )
        .bind(&touchpoints_id)
        .bind(customer_id)
        .execute(&self.pool)
        .await?;

        Ok(touchpoints_id)
    }

    /// Read a touchpoints record back by id.
    pub async fn get(&self, touchpoints_id: &str) -> Result<Option<TouchpointsRecord>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT id, customer_id, welcome_outreach, technical_onboarding,
                      follow_up_call, feedback_session
               FROM touchpoints
               WHERE id = ?"#,
        )
        .bind(touchpoints_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| TouchpointsRecord {
            id: row.get("id"),
            customer_id: row.get("customer_id"),
            welcome_outreach: row.get("welcome_outreach"),
            technical_onboarding: row.get("technical_onboarding"),
            follow_up_call: row.get("follow_up_call"),
            feedback_session: row.get("feedback_session"),
        }))
    }
}

#[async_trait]
impl TouchpointsStore for TouchpointsRepository {
    async fn create(&self, customer_id: &str) -> Result<String, StoreError> {
        Ok(TouchpointsRepository::create(self, customer_id).await?)
    }
}
