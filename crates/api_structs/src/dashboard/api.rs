use crate::dtos::{IntentionDistributionDTO, ReminderEventDTO};
use serde::{Deserialize, Serialize};

pub mod get_reminder_feed {
    use super::*;

    /// The ordered reminder feed, ascending by event date.
    pub type APIResponse = Vec<ReminderEventDTO>;
}

pub mod get_dashboard_statistics {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub monthly_sales_amount: f64,
        pub monthly_order_count: i64,
        pub average_order_value: i64,
        pub monthly_new_customers: i64,
        pub monthly_visit_count: i64,
        pub monthly_deal_customers: i64,
        pub intention_distribution: IntentionDistributionDTO,
        pub important_reminders: Vec<ReminderEventDTO>,
    }
}
