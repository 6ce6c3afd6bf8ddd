use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

/// One product purchase row. Every dated purchase implies exactly one
/// follow-up contact `PRODUCT_FOLLOW_UP_DAYS` after the purchase date.
#[derive(Debug, Clone)]
pub struct ProductPurchase {
    pub id: ID,
    pub customer_id: ID,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub purchase_date: Option<NaiveDate>,
}

impl ProductPurchase {
    pub fn new(customer_id: ID, customer_name: &str, product_name: &str) -> Self {
        Self {
            id: Default::default(),
            customer_id,
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity: 1,
            unit_price: 0.0,
            purchase_date: None,
        }
    }
}

impl Entity<ID> for ProductPurchase {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
