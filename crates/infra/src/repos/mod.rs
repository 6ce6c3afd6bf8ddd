mod customer;
mod product;
mod shared;
mod visit;

pub use customer::ICustomerRepo;
use customer::{InMemoryCustomerRepo, PostgresCustomerRepo};
pub use product::IProductRepo;
use product::{InMemoryProductRepo, PostgresProductRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use visit::IVisitRepo;
use visit::{InMemoryVisitRepo, PostgresVisitRepo};

#[derive(Clone)]
pub struct Repos {
    pub customers: Arc<dyn ICustomerRepo>,
    pub visits: Arc<dyn IVisitRepo>,
    pub products: Arc<dyn IProductRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            customers: Arc::new(PostgresCustomerRepo::new(pool.clone())),
            visits: Arc::new(PostgresVisitRepo::new(pool.clone())),
            products: Arc::new(PostgresProductRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            customers: Arc::new(InMemoryCustomerRepo::new()),
            visits: Arc::new(InMemoryVisitRepo::new()),
            products: Arc::new(InMemoryProductRepo::new()),
        }
    }
}
