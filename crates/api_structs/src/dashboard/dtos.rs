use chrono::NaiveDate;
use crm_dashboard_domain::{IntentionDistribution, ReminderEvent, ReminderKind, ID};
use serde::{Deserialize, Serialize};

/// Wire shape of one reminder feed entry.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEventDTO {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub customer_id: ID,
    pub customer_name: String,
    pub event_time: NaiveDate,
    pub content: Option<String>,
    /// Human readable label of the reminder category
    pub event_type: String,
}

impl ReminderEventDTO {
    pub fn new(event: ReminderEvent) -> Self {
        Self {
            kind: event.kind,
            customer_id: event.customer_id,
            customer_name: event.customer_name,
            event_time: event.event_date,
            content: event.content,
            event_type: event.kind.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IntentionDistributionDTO {
    #[serde(rename = "H")]
    pub h: i64,
    #[serde(rename = "A")]
    pub a: i64,
    #[serde(rename = "B")]
    pub b: i64,
    #[serde(rename = "C")]
    pub c: i64,
    #[serde(rename = "D")]
    pub d: i64,
}

impl IntentionDistributionDTO {
    pub fn new(distribution: IntentionDistribution) -> Self {
        Self {
            h: distribution.h,
            a: distribution.a,
            b: distribution.b,
            c: distribution.c,
            d: distribution.d,
        }
    }
}
