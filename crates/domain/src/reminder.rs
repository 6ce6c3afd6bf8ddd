use crate::shared::entity::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of calendar days between a product purchase and the follow-up
/// contact it implies. Fixed policy, not configurable per record.
pub const PRODUCT_FOLLOW_UP_DAYS: i64 = 90;

/// The category of an upcoming follow-up obligation. The feed is a single
/// timeline over all four categories, so the aggregation code never has to
/// branch on source-specific fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Visit,
    Birthday,
    PlannedVisit,
    ProductVisit,
}

impl ReminderKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Visit => "scheduled visit",
            Self::Birthday => "customer birthday",
            Self::PlannedVisit => "planned customer visit",
            Self::ProductVisit => "product follow-up",
        }
    }
}

/// A single entry in the reminder feed. Constructed fresh on every
/// aggregation and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEvent {
    pub kind: ReminderKind,
    pub customer_id: ID,
    pub customer_name: String,
    pub event_date: NaiveDate,
    pub content: Option<String>,
}
