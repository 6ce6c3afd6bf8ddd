mod get_reminder_feed;
mod get_statistics;

use actix_web::web;
use get_reminder_feed::get_reminder_feed_controller;
use get_statistics::get_dashboard_statistics_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/dashboard/statistics",
        web::get().to(get_dashboard_statistics_controller),
    );
    cfg.route(
        "/dashboard/reminders",
        web::get().to(get_reminder_feed_controller),
    );
}
