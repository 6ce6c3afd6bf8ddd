use super::IProductRepo;
use crate::repos::shared::legacy_date::read_date;
use chrono::NaiveDate;
use crm_dashboard_domain::ProductPurchase;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

pub struct PostgresProductRepo {
    pool: PgPool,
}

impl PostgresProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductPurchaseRaw {
    product_uid: Uuid,
    customer_uid: Uuid,
    customer_name: String,
    product_name: String,
    quantity: i64,
    unit_price: f64,
    purchase_date: Option<String>,
}

impl ProductPurchaseRaw {
    fn into_domain(self) -> ProductPurchase {
        ProductPurchase {
            id: self.product_uid.into(),
            customer_id: self.customer_uid.into(),
            customer_name: self.customer_name,
            product_name: self.product_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            purchase_date: self
                .purchase_date
                .as_deref()
                .and_then(|value| read_date("purchase_date", value)),
        }
    }
}

const SELECT_PURCHASES: &str = r#"
    SELECT p.product_uid, p.customer_uid, COALESCE(c.name, '') AS customer_name,
           p.product_name, p.quantity, p.unit_price, p.purchase_date
    FROM products AS p
    LEFT JOIN customers AS c ON p.customer_uid = c.customer_uid
"#;

#[async_trait::async_trait]
impl IProductRepo for PostgresProductRepo {
    async fn insert(&self, purchase: &ProductPurchase) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO products
            (product_uid, customer_uid, product_name, quantity, unit_price, purchase_date)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*purchase.id.inner_ref())
        .bind(*purchase.customer_id.inner_ref())
        .bind(&purchase.product_name)
        .bind(purchase.quantity)
        .bind(purchase.unit_price)
        .bind(
            purchase
                .purchase_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_purchased(&self) -> anyhow::Result<Vec<ProductPurchase>> {
        let query = format!(
            "{} WHERE p.purchase_date IS NOT NULL AND p.purchase_date != '' \
             ORDER BY left(p.purchase_date, 10) ASC",
            SELECT_PURCHASES
        );
        let purchases = sqlx::query_as::<_, ProductPurchaseRaw>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Find purchased products query failed: {:?}", e);
                e
            })?;

        Ok(purchases
            .into_iter()
            .map(|purchase| purchase.into_domain())
            .collect())
    }

    async fn find_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ProductPurchase>> {
        let query = format!(
            "{} WHERE p.purchase_date IS NOT NULL AND p.purchase_date != '' \
             AND left(p.purchase_date, 10) >= $1 AND left(p.purchase_date, 10) <= $2 \
             ORDER BY left(p.purchase_date, 10) ASC",
            SELECT_PURCHASES
        );
        let purchases = sqlx::query_as::<_, ProductPurchaseRaw>(&query)
            .bind(start.format("%Y-%m-%d").to_string())
            .bind(end.format("%Y-%m-%d").to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Find products in period query failed: {:?}", e);
                e
            })?;

        Ok(purchases
            .into_iter()
            .map(|purchase| purchase.into_domain())
            .collect())
    }
}
