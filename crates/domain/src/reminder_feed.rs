//! Pure assembly of the unified follow-up reminder feed.
//!
//! Four independently shaped sources produce candidate events for a
//! lookahead window; the aggregator concatenates them in a fixed order and
//! stable-sorts by event date, so events sharing a date keep the source
//! order: visits, birthdays, planned visits, product follow-ups.

use crate::customer::Customer;
use crate::date::MonthDay;
use crate::product::ProductPurchase;
use crate::reminder::{ReminderEvent, ReminderKind, PRODUCT_FOLLOW_UP_DAYS};
use crate::reminder_window::ReminderWindow;
use crate::visit::Visit;
use chrono::Duration;

/// One candidate event per visit whose date falls inside the window. The
/// time of day is dropped for ordering, only the date matters.
pub fn visit_events(visits: &[Visit], window: &ReminderWindow) -> Vec<ReminderEvent> {
    let mut events = visits
        .iter()
        .filter(|visit| window.contains(visit.visit_time.date()))
        .map(|visit| ReminderEvent {
            kind: ReminderKind::Visit,
            customer_id: visit.customer_id.clone(),
            customer_name: visit.customer_name.clone(),
            event_date: visit.visit_time.date(),
            content: visit.content.clone(),
        })
        .collect::<Vec<_>>();
    events.sort_by_key(|event| event.event_date);
    events
}

/// One candidate event per customer whose next birthday occurrence falls
/// inside the window. Customers without a birthday produce nothing.
///
/// Candidates that wrap into the next calendar year are ordered after the
/// ones in the current year, then by month-day ascending within each
/// group, which yields a chronological sub-list without comparing full
/// dates.
pub fn birthday_events(customers: &[Customer], window: &ReminderWindow) -> Vec<ReminderEvent> {
    let mut candidates = customers
        .iter()
        .filter_map(|customer| {
            customer
                .birthday
                .map(|birthday| (MonthDay::from(birthday), customer))
        })
        .filter(|(md, _)| window.contains_month_day(*md))
        .map(|(md, customer)| (md < window.start_md, md, customer))
        .collect::<Vec<_>>();
    candidates.sort_by_key(|(wrapped, md, _)| (*wrapped, *md));

    candidates
        .into_iter()
        .filter_map(|(_, md, customer)| {
            window.next_occurrence(md).map(|event_date| ReminderEvent {
                kind: ReminderKind::Birthday,
                customer_id: customer.id.clone(),
                customer_name: customer.name.clone(),
                event_date,
                content: None,
            })
        })
        .collect()
}

/// One candidate event per customer with an explicit next-visit plan
/// inside the window.
pub fn planned_visit_events(customers: &[Customer], window: &ReminderWindow) -> Vec<ReminderEvent> {
    let mut events = customers
        .iter()
        .filter_map(|customer| {
            customer
                .planned_visit_date
                .filter(|date| window.contains(*date))
                .map(|event_date| ReminderEvent {
                    kind: ReminderKind::PlannedVisit,
                    customer_id: customer.id.clone(),
                    customer_name: customer.name.clone(),
                    event_date,
                    content: customer.planned_visit_content.clone(),
                })
        })
        .collect::<Vec<_>>();
    events.sort_by_key(|event| event.event_date);
    events
}

/// One candidate event per dated purchase whose derived follow-up date,
/// `purchase_date + PRODUCT_FOLLOW_UP_DAYS`, falls inside the window. A
/// customer with many purchases gets many follow-up events.
pub fn product_follow_up_events(
    purchases: &[ProductPurchase],
    window: &ReminderWindow,
) -> Vec<ReminderEvent> {
    let mut events = purchases
        .iter()
        .filter_map(|purchase| {
            purchase
                .purchase_date
                .map(|date| date + Duration::days(PRODUCT_FOLLOW_UP_DAYS))
                .filter(|follow_up| window.contains(*follow_up))
                .map(|event_date| ReminderEvent {
                    kind: ReminderKind::ProductVisit,
                    customer_id: purchase.customer_id.clone(),
                    customer_name: purchase.customer_name.clone(),
                    event_date,
                    content: Some(format!("Follow up on product {}", purchase.product_name)),
                })
        })
        .collect::<Vec<_>>();
    events.sort_by_key(|event| event.event_date);
    events
}

/// Merges the four candidate lists into one timeline. The concatenation
/// order is the tie-break policy for events on the same date, so the sort
/// has to be stable.
pub fn assemble(
    visits: Vec<ReminderEvent>,
    birthdays: Vec<ReminderEvent>,
    planned_visits: Vec<ReminderEvent>,
    product_follow_ups: Vec<ReminderEvent>,
) -> Vec<ReminderEvent> {
    let mut feed =
        Vec::with_capacity(visits.len() + birthdays.len() + planned_visits.len() + product_follow_ups.len());
    feed.extend(visits);
    feed.extend(birthdays);
    feed.extend(planned_visits);
    feed.extend(product_follow_ups);
    feed.sort_by_key(|event| event.event_date);
    feed
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn customer_with_birthday(name: &str, birthday: NaiveDate) -> Customer {
        let mut customer = Customer::new(name, date(2020, 1, 1));
        customer.birthday = Some(birthday);
        customer
    }

    fn dated_purchase(name: &str, purchase_date: NaiveDate) -> ProductPurchase {
        let mut purchase = ProductPurchase::new(Default::default(), name, "Model S");
        purchase.purchase_date = Some(purchase_date);
        purchase
    }

    #[test]
    fn it_emits_visits_inside_the_window_only() {
        let window = ReminderWindow::new(date(2024, 3, 1), 30).unwrap();
        let visits = vec![
            Visit::new(Default::default(), "Inside", datetime(2024, 3, 15, 10)),
            Visit::new(Default::default(), "Before", datetime(2024, 2, 29, 10)),
            Visit::new(Default::default(), "After", datetime(2024, 4, 1, 10)),
            Visit::new(Default::default(), "On start", datetime(2024, 3, 1, 16)),
        ];

        let events = visit_events(&visits, &window);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].customer_name, "On start");
        assert_eq!(events[0].event_date, date(2024, 3, 1));
        assert_eq!(events[1].customer_name, "Inside");
        assert_eq!(events[1].kind, ReminderKind::Visit);
    }

    #[test]
    fn it_matches_birthdays_without_wrap() {
        // today = 2024-03-01, end = 2024-03-31
        let window = ReminderWindow::new(date(2024, 3, 1), 30).unwrap();
        let customers = vec![
            customer_with_birthday("March", date(1990, 3, 15)),
            customer_with_birthday("April", date(1985, 4, 2)),
            Customer::new("No birthday", date(2020, 1, 1)),
        ];

        let events = birthday_events(&customers, &window);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].customer_name, "March");
        assert_eq!(events[0].event_date, date(2024, 3, 15));
        assert_eq!(events[0].kind, ReminderKind::Birthday);
    }

    #[test]
    fn it_matches_birthdays_across_a_year_boundary() {
        // today = 2024-12-20, end = 2025-02-18
        let window = ReminderWindow::new(date(2024, 12, 20), 60).unwrap();
        let customers = vec![
            customer_with_birthday("January", date(1970, 1, 5)),
            customer_with_birthday("December", date(1988, 12, 25)),
            customer_with_birthday("June", date(1992, 6, 15)),
        ];

        let events = birthday_events(&customers, &window);
        assert_eq!(events.len(), 2);
        // The December birthday stays in the current year and sorts first,
        // the January one wraps into the next year
        assert_eq!(events[0].customer_name, "December");
        assert_eq!(events[0].event_date, date(2024, 12, 25));
        assert_eq!(events[1].customer_name, "January");
        assert_eq!(events[1].event_date, date(2025, 1, 5));
    }

    #[test]
    fn it_matches_a_birthday_on_the_window_start() {
        let window = ReminderWindow::new(date(2024, 3, 1), 30).unwrap();
        let customers = vec![customer_with_birthday("Today", date(1999, 3, 1))];

        let events = birthday_events(&customers, &window);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_date, date(2024, 3, 1));
    }

    #[test]
    fn birthday_event_dates_preserve_the_month_day() {
        let window = ReminderWindow::new(date(2024, 12, 20), 60).unwrap();
        let customers = vec![
            customer_with_birthday("A", date(1970, 12, 31)),
            customer_with_birthday("B", date(1970, 1, 1)),
            customer_with_birthday("C", date(1970, 2, 18)),
        ];

        for event in birthday_events(&customers, &window) {
            let source = customers
                .iter()
                .find(|c| c.name == event.customer_name)
                .and_then(|c| c.birthday)
                .unwrap();
            assert_eq!(MonthDay::from(event.event_date), MonthDay::from(source));
            assert!(window.contains(event.event_date));
        }
    }

    #[test]
    fn it_emits_planned_visits_with_their_content() {
        let window = ReminderWindow::new(date(2024, 3, 1), 30).unwrap();
        let mut inside = Customer::new("Planned", date(2020, 1, 1));
        inside.planned_visit_date = Some(date(2024, 3, 10));
        inside.planned_visit_content = Some("Contract renewal".into());
        let mut outside = Customer::new("Too late", date(2020, 1, 1));
        outside.planned_visit_date = Some(date(2024, 5, 1));
        let none = Customer::new("No plan", date(2020, 1, 1));

        let events = planned_visit_events(&[inside, outside, none], &window);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ReminderKind::PlannedVisit);
        assert_eq!(events[0].content, Some("Contract renewal".into()));
    }

    #[test]
    fn it_derives_follow_ups_ninety_days_after_purchase() {
        // purchase on 2024-11-05 -> follow-up on 2025-02-03
        let window = ReminderWindow::new(date(2025, 1, 1), 90).unwrap();
        let purchases = vec![dated_purchase("Rollover", date(2024, 11, 5))];

        let events = product_follow_up_events(&purchases, &window);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_date, date(2025, 2, 3));
        assert_eq!(events[0].kind, ReminderKind::ProductVisit);
        assert_eq!(events[0].content, Some("Follow up on product Model S".into()));
    }

    #[test]
    fn it_derives_follow_ups_across_a_year_rollover() {
        // purchase on 2024-12-10 -> follow-up on 2025-03-10
        let window = ReminderWindow::new(date(2025, 1, 1), 90).unwrap();
        let purchases = vec![
            dated_purchase("Qualifies", date(2024, 12, 10)),
            ProductPurchase::new(Default::default(), "Undated", "Model X"),
            dated_purchase("Too old", date(2024, 1, 1)),
        ];

        let events = product_follow_up_events(&purchases, &window);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].customer_name, "Qualifies");
        assert_eq!(events[0].event_date, date(2025, 3, 10));
    }

    #[test]
    fn a_customer_with_many_purchases_gets_many_follow_ups() {
        let window = ReminderWindow::new(date(2024, 6, 1), 360).unwrap();
        let customer_id = crate::ID::new();
        let mut first = dated_purchase("Repeat", date(2024, 6, 1));
        first.customer_id = customer_id.clone();
        let mut second = dated_purchase("Repeat", date(2024, 7, 1));
        second.customer_id = customer_id;

        let events = product_follow_up_events(&[first, second], &window);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_date, date(2024, 8, 30));
        assert_eq!(events[1].event_date, date(2024, 9, 29));
    }

    #[test]
    fn it_assembles_a_feed_sorted_by_event_date() {
        let window = ReminderWindow::new(date(2024, 3, 1), 60).unwrap();
        let visits = visit_events(
            &[Visit::new(Default::default(), "V", datetime(2024, 4, 10, 9))],
            &window,
        );
        let birthdays = birthday_events(
            &[customer_with_birthday("B", date(1990, 3, 5))],
            &window,
        );
        let planned = {
            let mut customer = Customer::new("P", date(2020, 1, 1));
            customer.planned_visit_date = Some(date(2024, 3, 20));
            planned_visit_events(&[customer], &window)
        };
        let products = product_follow_up_events(
            &[dated_purchase("F", date(2024, 1, 1))],
            &window,
        );

        let feed = assemble(visits, birthdays, planned, products);
        let dates = feed.iter().map(|e| e.event_date).collect::<Vec<_>>();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(feed.len(), 4);
    }

    #[test]
    fn events_on_the_same_date_keep_the_source_order() {
        let window = ReminderWindow::new(date(2024, 3, 1), 30).unwrap();
        let collision = date(2024, 3, 15);

        let visits = visit_events(
            &[Visit::new(Default::default(), "Visit", datetime(2024, 3, 15, 9))],
            &window,
        );
        let birthdays = birthday_events(
            &[customer_with_birthday("Birthday", date(1990, 3, 15))],
            &window,
        );
        let planned = {
            let mut customer = Customer::new("Planned", date(2020, 1, 1));
            customer.planned_visit_date = Some(collision);
            planned_visit_events(&[customer], &window)
        };
        let products = product_follow_up_events(
            // 2023-12-16 + 90 days = 2024-03-15
            &[dated_purchase("Product", date(2023, 12, 16))],
            &window,
        );

        let feed = assemble(visits, birthdays, planned, products);
        assert_eq!(feed.len(), 4);
        assert!(feed.iter().all(|event| event.event_date == collision));
        let kinds = feed.iter().map(|e| e.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                ReminderKind::Visit,
                ReminderKind::Birthday,
                ReminderKind::PlannedVisit,
                ReminderKind::ProductVisit,
            ]
        );
    }

    #[test]
    fn no_duplicate_suppression_across_sources() {
        // A customer with both a planned visit and a product follow-up on
        // the same day legitimately produces two entries
        let window = ReminderWindow::new(date(2024, 3, 1), 30).unwrap();
        let customer_id = crate::ID::new();
        let mut customer = Customer::new("Double", date(2020, 1, 1));
        customer.id = customer_id.clone();
        customer.planned_visit_date = Some(date(2024, 3, 15));
        let mut purchase = dated_purchase("Double", date(2023, 12, 16));
        purchase.customer_id = customer_id;

        let feed = assemble(
            Vec::new(),
            Vec::new(),
            planned_visit_events(&[customer], &window),
            product_follow_up_events(&[purchase], &window),
        );
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn empty_sources_produce_an_empty_feed() {
        let feed = assemble(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        assert!(feed.is_empty());
    }

    #[test]
    fn all_events_stay_inside_the_window() {
        let window = ReminderWindow::new(date(2024, 12, 20), 360).unwrap();
        let customers = vec![
            customer_with_birthday("A", date(1990, 1, 5)),
            customer_with_birthday("B", date(1990, 12, 25)),
        ];
        let purchases = vec![
            dated_purchase("C", date(2024, 12, 1)),
            dated_purchase("D", date(2025, 6, 1)),
        ];

        let feed = assemble(
            Vec::new(),
            birthday_events(&customers, &window),
            Vec::new(),
            product_follow_up_events(&purchases, &window),
        );
        assert!(!feed.is_empty());
        for event in &feed {
            assert!(window.contains(event.event_date));
        }
    }
}
