//! Domain types shared by the repositories, the workflow, and the event
//! payload.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Minimal view of a corporate customer returned by the name lookup.
#[derive(Debug, Clone)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
    pub subscription_tier: String,
}

/// Snapshot of a corporate customer as embedded in the published event.
///
/// Timestamps are rendered to ISO-8601 text at read time so the event
/// payload serializes without further conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSnapshot {
    pub id: String,
    pub name: String,
    pub subscription_tier: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A touchpoints row as stored in the datastore.
///
/// All four schedule fields are NULL at creation; this workflow never sets
/// them.
#[derive(Debug, Clone)]
pub struct TouchpointsRecord {
    pub id: String,
    pub customer_id: String,
    pub welcome_outreach: Option<NaiveDateTime>,
    pub technical_onboarding: Option<NaiveDateTime>,
    pub follow_up_call: Option<NaiveDateTime>,
    pub feedback_session: Option<NaiveDateTime>,
}

impl TouchpointsRecord {
    /// True when no engagement has been scheduled yet.
    pub fn is_unscheduled(&self) -> bool {
        self.welcome_outreach.is_none()
            && self.technical_onboarding.is_none()
            && self.follow_up_call.is_none()
            && self.feedback_session.is_none()
    }
}

/// Render a datastore timestamp the way the event payload expects it.
pub(crate) fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn fresh_record_is_unscheduled() {
        let record = TouchpointsRecord {
            id: "a".into(),
            customer_id: "b".into(),
            welcome_outreach: None,
            technical_onboarding: None,
            follow_up_call: None,
            feedback_session: None,
        };
        assert!(record.is_unscheduled());
    }

    #[test]
    fn timestamp_formats_as_iso8601() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-15T09:30:00");
    }
}
