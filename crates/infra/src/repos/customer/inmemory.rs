use super::ICustomerRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use crm_dashboard_domain::{Customer, ID};
use std::sync::Mutex;

pub struct InMemoryCustomerRepo {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerRepo {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for InMemoryCustomerRepo {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()> {
        insert(customer, &self.customers);
        Ok(())
    }

    async fn find(&self, customer_id: &ID) -> Option<Customer> {
        find(customer_id, &self.customers)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        Ok(find_by(&self.customers, |_| true))
    }

    async fn find_with_birthday(&self) -> anyhow::Result<Vec<Customer>> {
        Ok(find_by(&self.customers, |customer| {
            customer.birthday.is_some()
        }))
    }

    async fn find_planned_visits_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Customer>> {
        let mut customers = find_by(&self.customers, |customer| {
            customer
                .planned_visit_date
                .map(|date| start <= date && date <= end)
                .unwrap_or(false)
        });
        customers.sort_by_key(|customer| customer.planned_visit_date);
        Ok(customers)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crm_dashboard_domain::Entity;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn it_finds_inserted_customers() {
        let repo = InMemoryCustomerRepo::new();
        let customer = Customer::new("Acme contact", date(2024, 1, 10));
        repo.insert(&customer).await.unwrap();

        let found = repo.find(&customer.id).await.unwrap();
        assert!(Entity::eq(&found, &customer));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn it_filters_customers_by_birthday_and_plan() {
        let repo = InMemoryCustomerRepo::new();
        let mut with_birthday = Customer::new("Birthday", date(2024, 1, 10));
        with_birthday.birthday = Some(date(1990, 6, 1));
        let mut with_plan = Customer::new("Planned", date(2024, 1, 10));
        with_plan.planned_visit_date = Some(date(2024, 5, 1));
        let plain = Customer::new("Plain", date(2024, 1, 10));

        for customer in [&with_birthday, &with_plan, &plain].iter() {
            repo.insert(customer).await.unwrap();
        }

        let birthdays = repo.find_with_birthday().await.unwrap();
        assert_eq!(birthdays.len(), 1);
        assert_eq!(birthdays[0].name, "Birthday");

        let planned = repo
            .find_planned_visits_in_period(date(2024, 4, 1), date(2024, 6, 1))
            .await
            .unwrap();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].name, "Planned");

        let outside = repo
            .find_planned_visits_in_period(date(2024, 6, 2), date(2024, 7, 1))
            .await
            .unwrap();
        assert!(outside.is_empty());
    }
}
