mod inmemory;
mod postgres;

use chrono::NaiveDate;
use crm_dashboard_domain::Visit;
pub use inmemory::InMemoryVisitRepo;
pub use postgres::PostgresVisitRepo;

#[async_trait::async_trait]
pub trait IVisitRepo: Send + Sync {
    async fn insert(&self, visit: &Visit) -> anyhow::Result<()>;
    /// Visits whose date portion falls inside the inclusive period.
    async fn find_in_period(&self, start: NaiveDate, end: NaiveDate)
        -> anyhow::Result<Vec<Visit>>;
}
