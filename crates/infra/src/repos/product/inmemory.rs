use super::IProductRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use crm_dashboard_domain::ProductPurchase;
use std::sync::Mutex;

pub struct InMemoryProductRepo {
    purchases: Mutex<Vec<ProductPurchase>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self {
            purchases: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IProductRepo for InMemoryProductRepo {
    async fn insert(&self, purchase: &ProductPurchase) -> anyhow::Result<()> {
        insert(purchase, &self.purchases);
        Ok(())
    }

    async fn find_purchased(&self) -> anyhow::Result<Vec<ProductPurchase>> {
        let mut purchases = find_by(&self.purchases, |purchase| purchase.purchase_date.is_some());
        purchases.sort_by_key(|purchase| purchase.purchase_date);
        Ok(purchases)
    }

    async fn find_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<ProductPurchase>> {
        let mut purchases = find_by(&self.purchases, |purchase| {
            purchase
                .purchase_date
                .map(|date| start <= date && date <= end)
                .unwrap_or(false)
        });
        purchases.sort_by_key(|purchase| purchase.purchase_date);
        Ok(purchases)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crm_dashboard_domain::ID;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn it_filters_out_undated_purchases() {
        let repo = InMemoryProductRepo::new();
        let mut dated = ProductPurchase::new(ID::new(), "Dated", "Model S");
        dated.purchase_date = Some(date(2024, 2, 1));
        let undated = ProductPurchase::new(ID::new(), "Undated", "Model X");

        repo.insert(&dated).await.unwrap();
        repo.insert(&undated).await.unwrap();

        let purchased = repo.find_purchased().await.unwrap();
        assert_eq!(purchased.len(), 1);
        assert_eq!(purchased[0].customer_name, "Dated");

        let in_february = repo
            .find_in_period(date(2024, 2, 1), date(2024, 2, 29))
            .await
            .unwrap();
        assert_eq!(in_february.len(), 1);

        let in_march = repo
            .find_in_period(date(2024, 3, 1), date(2024, 3, 31))
            .await
            .unwrap();
        assert!(in_march.is_empty());
    }
}
