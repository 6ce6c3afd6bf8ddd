use super::IVisitRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use crm_dashboard_domain::Visit;
use std::sync::Mutex;

pub struct InMemoryVisitRepo {
    visits: Mutex<Vec<Visit>>,
}

impl InMemoryVisitRepo {
    pub fn new() -> Self {
        Self {
            visits: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IVisitRepo for InMemoryVisitRepo {
    async fn insert(&self, visit: &Visit) -> anyhow::Result<()> {
        insert(visit, &self.visits);
        Ok(())
    }

    async fn find_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Visit>> {
        let mut visits = find_by(&self.visits, |visit| {
            let date = visit.visit_time.date();
            start <= date && date <= end
        });
        visits.sort_by_key(|visit| visit.visit_time.date());
        Ok(visits)
    }
}
