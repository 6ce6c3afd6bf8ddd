mod inmemory;
mod postgres;

use chrono::NaiveDate;
use crm_dashboard_domain::ProductPurchase;
pub use inmemory::InMemoryProductRepo;
pub use postgres::PostgresProductRepo;

#[async_trait::async_trait]
pub trait IProductRepo: Send + Sync {
    async fn insert(&self, purchase: &ProductPurchase) -> anyhow::Result<()>;
    /// Every purchase with a purchase date. The follow-up date is derived
    /// by the reminder engine, the store never pre-computes it.
    async fn find_purchased(&self) -> anyhow::Result<Vec<ProductPurchase>>;
    async fn find_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ProductPurchase>>;
}
