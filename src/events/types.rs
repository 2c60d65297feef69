//! Event payload types for the touchpoints-created notification.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CustomerSnapshot;

/// Constant `event_type` discriminator carried by every published message.
pub const EVENT_TYPE: &str = "touchpoints-created";

/// Suggested follow-ups for downstream consumers, in schedule order.
pub const NEXT_ACTIONS: [&str; 4] = [
    "Schedule welcome outreach",
    "Plan technical onboarding session",
    "Set up follow-up call",
    "Arrange feedback session",
];

/// The four schedule fields of a touchpoints record as event sub-state.
///
/// At creation all of them are null; downstream schedulers fill them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TouchpointSchedule {
    pub welcome_outreach: Option<String>,
    pub technical_onboarding: Option<String>,
    pub follow_up_call: Option<String>,
    pub feedback_session: Option<String>,
}

/// The message published after a touchpoints record is committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TouchpointsCreatedEvent {
    pub event_type: String,
    /// UTC ISO-8601 with trailing `Z`.
    pub timestamp: String,
    pub touchpoints_id: String,
    pub customer: CustomerSnapshot,
    pub touchpoints: TouchpointSchedule,
    pub next_actions: Vec<String>,
}

impl TouchpointsCreatedEvent {
    /// Build the event for a freshly created record.
    pub fn new(touchpoints_id: &str, customer: CustomerSnapshot) -> Self {
        Self {
            event_type: EVENT_TYPE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            touchpoints_id: touchpoints_id.to_string(),
            customer,
            touchpoints: TouchpointSchedule::default(),
            next_actions: NEXT_ACTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> CustomerSnapshot {
        CustomerSnapshot {
            id: "cust-1".into(),
            name: "Example Tech Solutions".into(),
            subscription_tier: "enterprise".into(),
            created_at: Some("2024-03-15T09:30:00".into()),
            updated_at: None,
        }
    }

    #[test]
    fn event_carries_constant_type_and_ordered_actions() {
        let event = TouchpointsCreatedEvent::new("tp-1", snapshot());
        assert_eq!(event.event_type, "touchpoints-created");
        assert_eq!(event.next_actions.len(), 4);
        assert_eq!(event.next_actions[0], "Schedule welcome outreach");
        assert_eq!(event.next_actions[3], "Arrange feedback session");
        assert!(event.timestamp.ends_with('Z'));
    }

    #[test]
    fn serialized_schedule_fields_are_all_null() {
        let event = TouchpointsCreatedEvent::new("tp-1", snapshot());
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        let touchpoints = json.get("touchpoints").unwrap();
        for field in [
            "welcome_outreach",
            "technical_onboarding",
            "follow_up_call",
            "feedback_session",
        ] {
            assert!(touchpoints.get(field).unwrap().is_null(), "{field} not null");
        }
        assert_eq!(json["customer"]["name"], "Example Tech Solutions");
        assert_eq!(json["touchpoints_id"], "tp-1");
    }
}
