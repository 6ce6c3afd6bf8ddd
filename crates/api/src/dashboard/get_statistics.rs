use super::get_reminder_feed::fetch_reminder_feed;
use crate::error::CrmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{Datelike, NaiveDate};
use crm_dashboard_api_structs::dtos::{IntentionDistributionDTO, ReminderEventDTO};
use crm_dashboard_api_structs::get_dashboard_statistics::APIResponse;
use crm_dashboard_domain::{IntentionDistribution, ReminderEvent, ReminderWindow};
use crm_dashboard_infra::CrmContext;
use std::collections::HashSet;
use tracing::error;

pub async fn get_dashboard_statistics_controller(
    ctx: web::Data<CrmContext>,
) -> Result<HttpResponse, CrmError> {
    let usecase = GetDashboardStatisticsUseCase {
        today: ctx.sys.today(),
        lookahead_days: ctx.config.reminder_lookahead_days,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                monthly_sales_amount: res.monthly_sales_amount,
                monthly_order_count: res.monthly_order_count,
                average_order_value: res.average_order_value,
                monthly_new_customers: res.monthly_new_customers,
                monthly_visit_count: res.monthly_visit_count,
                monthly_deal_customers: res.monthly_deal_customers,
                intention_distribution: IntentionDistributionDTO::new(res.intention_distribution),
                important_reminders: res
                    .important_reminders
                    .into_iter()
                    .map(ReminderEventDTO::new)
                    .collect(),
            })
        })
        .map_err(|e| match e {
            UseCaseErrors::InvalidWindow => {
                CrmError::BadClientData("The reminder lookahead window is invalid".into())
            }
            UseCaseErrors::StorageError => CrmError::InternalError,
        })
}

/// Month-to-date sales and activity counters for the dashboard, together
/// with the full reminder feed shown in the important reminders widget.
#[derive(Debug)]
pub struct GetDashboardStatisticsUseCase {
    pub today: NaiveDate,
    pub lookahead_days: i64,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub monthly_sales_amount: f64,
    pub monthly_order_count: i64,
    pub average_order_value: i64,
    pub monthly_new_customers: i64,
    pub monthly_visit_count: i64,
    pub monthly_deal_customers: i64,
    pub intention_distribution: IntentionDistribution,
    pub important_reminders: Vec<ReminderEvent>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidWindow,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDashboardStatisticsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetDashboardStatistics";

    async fn execute(&mut self, ctx: &CrmContext) -> Result<Self::Response, Self::Errors> {
        let month_start = NaiveDate::from_ymd_opt(self.today.year(), self.today.month(), 1)
            .unwrap_or(self.today);
        let window = ReminderWindow::new(self.today, self.lookahead_days)
            .map_err(|_| UseCaseErrors::InvalidWindow)?;

        let (purchases, customers, visits, important_reminders) = futures::try_join!(
            ctx.repos.products.find_in_period(month_start, self.today),
            ctx.repos.customers.find_all(),
            ctx.repos.visits.find_in_period(month_start, self.today),
            fetch_reminder_feed(&window, ctx),
        )
        .map_err(|e| {
            error!("Dashboard statistics aggregation failed: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        let monthly_sales_amount: f64 = purchases
            .iter()
            .map(|purchase| purchase.quantity as f64 * purchase.unit_price)
            .sum();
        let monthly_order_count = purchases.len() as i64;
        let average_order_value = if monthly_order_count > 0 {
            (monthly_sales_amount / monthly_order_count as f64).round() as i64
        } else {
            0
        };
        let monthly_deal_customers = purchases
            .iter()
            .map(|purchase| purchase.customer_id.clone())
            .collect::<HashSet<_>>()
            .len() as i64;
        let monthly_new_customers = customers
            .iter()
            .filter(|customer| customer.created_at >= month_start)
            .count() as i64;

        Ok(UseCaseResponse {
            monthly_sales_amount,
            monthly_order_count,
            average_order_value,
            monthly_new_customers,
            monthly_visit_count: visits.len() as i64,
            monthly_deal_customers,
            intention_distribution: IntentionDistribution::from_customers(&customers),
            important_reminders,
        })
    }
}
