use crate::shared::entity::{Entity, ID};
use chrono::NaiveDateTime;

/// One already-recorded visit plan in the visit log.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: ID,
    pub customer_id: ID,
    pub customer_name: String,
    pub visit_time: NaiveDateTime,
    pub content: Option<String>,
}

impl Visit {
    pub fn new(customer_id: ID, customer_name: &str, visit_time: NaiveDateTime) -> Self {
        Self {
            id: Default::default(),
            customer_id,
            customer_name: customer_name.into(),
            visit_time,
            content: None,
        }
    }
}

impl Entity<ID> for Visit {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
