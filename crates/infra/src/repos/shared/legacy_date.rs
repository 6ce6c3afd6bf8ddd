use chrono::{NaiveDate, NaiveDateTime};
use crm_dashboard_domain::date::{parse_date, parse_datetime};
use tracing::warn;

/// Date columns inherited from the previous system are stored as ISO-8601
/// text and may hold junk. A value that does not parse is skipped with a
/// warning instead of failing the whole query.
pub fn read_date(field: &str, value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Skipping malformed {} value: {}", field, value);
            None
        }
    }
}

pub fn read_datetime(field: &str, value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }
    match parse_datetime(value) {
        Ok(datetime) => Some(datetime),
        Err(_) => {
            warn!("Skipping malformed {} value: {}", field, value);
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_reads_dates_and_skips_junk() {
        assert_eq!(
            read_date("birthday", "1990-03-15"),
            NaiveDate::from_ymd_opt(1990, 3, 15)
        );
        assert_eq!(
            read_date("birthday", "1990-03-15T08:00:00"),
            NaiveDate::from_ymd_opt(1990, 3, 15)
        );
        assert_eq!(read_date("birthday", ""), None);
        assert_eq!(read_date("birthday", "unknown"), None);
        assert_eq!(read_datetime("visit_time", "not a time"), None);
        assert!(read_datetime("visit_time", "2024-05-01T10:30:00").is_some());
    }
}
