use chrono::{NaiveDate, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn today(&self) -> NaiveDate {
        Utc::now().naive_utc().date()
    }
}
