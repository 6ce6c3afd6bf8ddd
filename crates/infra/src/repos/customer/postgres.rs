use super::ICustomerRepo;
use crate::repos::shared::legacy_date::read_date;
use chrono::NaiveDate;
use crm_dashboard_domain::{Customer, Intention, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

pub struct PostgresCustomerRepo {
    pool: PgPool,
}

impl PostgresCustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CustomerRaw {
    customer_uid: Uuid,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    company: Option<String>,
    intention: String,
    birthday: Option<String>,
    planned_visit_date: Option<String>,
    planned_visit_content: Option<String>,
    created_at: String,
}

impl CustomerRaw {
    /// A row with an unreadable `created_at` is dropped entirely; the
    /// optional date fields just fall back to absent.
    fn into_domain(self) -> Option<Customer> {
        let created_at = read_date("created_at", &self.created_at)?;
        Some(Customer {
            id: self.customer_uid.into(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            company: self.company,
            intention: self.intention.parse::<Intention>().unwrap_or_default(),
            birthday: self
                .birthday
                .as_deref()
                .and_then(|value| read_date("birthday", value)),
            planned_visit_date: self
                .planned_visit_date
                .as_deref()
                .and_then(|value| read_date("planned_visit_date", value)),
            planned_visit_content: self.planned_visit_content,
            created_at,
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait::async_trait]
impl ICustomerRepo for PostgresCustomerRepo {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO customers
            (customer_uid, name, phone, email, company, intention, birthday,
             planned_visit_date, planned_visit_content, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(*customer.id.inner_ref())
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.company)
        .bind(customer.intention.as_str())
        .bind(customer.birthday.map(format_date))
        .bind(customer.planned_visit_date.map(format_date))
        .bind(&customer.planned_visit_content)
        .bind(format_date(customer.created_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, customer_id: &ID) -> Option<Customer> {
        match sqlx::query_as::<_, CustomerRaw>(
            r#"
            SELECT * FROM customers AS c
            WHERE c.customer_uid = $1
            "#,
        )
        .bind(*customer_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(customer) => customer.into_domain(),
            Err(_) => None,
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, CustomerRaw>(
            r#"
            SELECT * FROM customers
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all customers query failed: {:?}", e);
            e
        })?;

        Ok(customers
            .into_iter()
            .filter_map(|customer| customer.into_domain())
            .collect())
    }

    async fn find_with_birthday(&self) -> anyhow::Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, CustomerRaw>(
            r#"
            SELECT * FROM customers AS c
            WHERE c.birthday IS NOT NULL AND c.birthday != ''
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find customers with birthday query failed: {:?}", e);
            e
        })?;

        Ok(customers
            .into_iter()
            .filter_map(|customer| customer.into_domain())
            .collect())
    }

    async fn find_planned_visits_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Customer>> {
        // left(.., 10) normalizes values that carry a time component, the
        // ISO date prefix compares correctly as text
        let customers = sqlx::query_as::<_, CustomerRaw>(
            r#"
            SELECT * FROM customers AS c
            WHERE c.planned_visit_date IS NOT NULL AND c.planned_visit_date != ''
              AND left(c.planned_visit_date, 10) >= $1
              AND left(c.planned_visit_date, 10) <= $2
            ORDER BY left(c.planned_visit_date, 10) ASC
            "#,
        )
        .bind(format_date(start))
        .bind(format_date(end))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find planned visits query failed: {:?}", e);
            e
        })?;

        Ok(customers
            .into_iter()
            .filter_map(|customer| customer.into_domain())
            .collect())
    }
}
