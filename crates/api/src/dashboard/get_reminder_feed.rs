use crate::error::CrmError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use crm_dashboard_api_structs::dtos::ReminderEventDTO;
use crm_dashboard_api_structs::get_reminder_feed::APIResponse;
use crm_dashboard_domain::{reminder_feed, ReminderEvent, ReminderWindow};
use crm_dashboard_infra::CrmContext;
use tracing::error;

pub async fn get_reminder_feed_controller(
    ctx: web::Data<CrmContext>,
) -> Result<HttpResponse, CrmError> {
    let usecase = GetReminderFeedUseCase {
        today: ctx.sys.today(),
        lookahead_days: ctx.config.reminder_lookahead_days,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| {
            let feed: APIResponse = events.into_iter().map(ReminderEventDTO::new).collect();
            HttpResponse::Ok().json(feed)
        })
        .map_err(|e| match e {
            UseCaseErrors::InvalidWindow => {
                CrmError::BadClientData("The reminder lookahead window is invalid".into())
            }
            UseCaseErrors::StorageError => CrmError::InternalError,
        })
}

/// Computes the unified follow-up reminder feed: every upcoming scheduled
/// visit, customer birthday, planned visit and product follow-up within
/// the lookahead window, merged into one timeline ordered by event date.
///
/// The feed always covers the maximum supported cycle; narrowing it down
/// to the cycle the end user selected is left to the consumer.
#[derive(Debug)]
pub struct GetReminderFeedUseCase {
    pub today: NaiveDate,
    pub lookahead_days: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidWindow,
    StorageError,
}

/// Reads the four sources concurrently and assembles the feed. A single
/// failed read fails the whole aggregation, an incomplete reminder list
/// must never be served as if it were complete.
pub(crate) async fn fetch_reminder_feed(
    window: &ReminderWindow,
    ctx: &CrmContext,
) -> anyhow::Result<Vec<ReminderEvent>> {
    let (visits, birthday_customers, planned_customers, purchases) = futures::try_join!(
        ctx.repos.visits.find_in_period(window.start, window.end),
        ctx.repos.customers.find_with_birthday(),
        ctx.repos
            .customers
            .find_planned_visits_in_period(window.start, window.end),
        ctx.repos.products.find_purchased(),
    )?;

    Ok(reminder_feed::assemble(
        reminder_feed::visit_events(&visits, window),
        reminder_feed::birthday_events(&birthday_customers, window),
        reminder_feed::planned_visit_events(&planned_customers, window),
        reminder_feed::product_follow_up_events(&purchases, window),
    ))
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderFeedUseCase {
    type Response = Vec<ReminderEvent>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminderFeed";

    async fn execute(&mut self, ctx: &CrmContext) -> Result<Self::Response, Self::Errors> {
        // Reject a bad window before any source is queried
        let window = ReminderWindow::new(self.today, self.lookahead_days)
            .map_err(|_| UseCaseErrors::InvalidWindow)?;

        fetch_reminder_feed(&window, ctx).await.map_err(|e| {
            error!("Reminder feed aggregation failed: {:?}", e);
            UseCaseErrors::StorageError
        })
    }
}
