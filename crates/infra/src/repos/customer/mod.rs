mod inmemory;
mod postgres;

use chrono::NaiveDate;
use crm_dashboard_domain::{Customer, ID};
pub use inmemory::InMemoryCustomerRepo;
pub use postgres::PostgresCustomerRepo;

#[async_trait::async_trait]
pub trait ICustomerRepo: Send + Sync {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()>;
    async fn find(&self, customer_id: &ID) -> Option<Customer>;
    async fn find_all(&self) -> anyhow::Result<Vec<Customer>>;
    /// Customers that supplied a birthday. The month-day window filtering
    /// happens in the reminder engine, not here.
    async fn find_with_birthday(&self) -> anyhow::Result<Vec<Customer>>;
    async fn find_planned_visits_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Customer>>;
}
