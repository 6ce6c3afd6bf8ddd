use super::IVisitRepo;
use crate::repos::shared::legacy_date::read_datetime;
use chrono::NaiveDate;
use crm_dashboard_domain::Visit;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

pub struct PostgresVisitRepo {
    pool: PgPool,
}

impl PostgresVisitRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VisitRaw {
    visit_uid: Uuid,
    customer_uid: Uuid,
    customer_name: String,
    visit_time: String,
    content: Option<String>,
}

impl VisitRaw {
    fn into_domain(self) -> Option<Visit> {
        let visit_time = read_datetime("visit_time", &self.visit_time)?;
        Some(Visit {
            id: self.visit_uid.into(),
            customer_id: self.customer_uid.into(),
            customer_name: self.customer_name,
            visit_time,
            content: self.content,
        })
    }
}

#[async_trait::async_trait]
impl IVisitRepo for PostgresVisitRepo {
    async fn insert(&self, visit: &Visit) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO visits(visit_uid, customer_uid, visit_time, content)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*visit.id.inner_ref())
        .bind(*visit.customer_id.inner_ref())
        .bind(visit.visit_time.format("%Y-%m-%dT%H:%M:%S").to_string())
        .bind(&visit.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Visit>> {
        let visits = sqlx::query_as::<_, VisitRaw>(
            r#"
            SELECT v.visit_uid, v.customer_uid, COALESCE(c.name, '') AS customer_name,
                   v.visit_time, v.content
            FROM visits AS v
            LEFT JOIN customers AS c ON v.customer_uid = c.customer_uid
            WHERE left(v.visit_time, 10) >= $1 AND left(v.visit_time, 10) <= $2
            ORDER BY left(v.visit_time, 10) ASC
            "#,
        )
        .bind(start.format("%Y-%m-%d").to_string())
        .bind(end.format("%Y-%m-%d").to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find visits in period query failed: {:?}", e);
            e
        })?;

        Ok(visits
            .into_iter()
            .filter_map(|visit| visit.into_domain())
            .collect())
    }
}
