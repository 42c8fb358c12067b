use chrono::{NaiveDate, Utc};

/// Source of the calendar date attendance is recorded against.
///
/// Always the UTC date, never the local one: a deployment west of
/// Greenwich marking attendance at 23:30 local must not land on the
/// next day's roster.
pub trait Clock: Send + Sync {
    fn today_utc(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today_utc(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Pins the date, so tests don't depend on wall-clock time.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today_utc(&self) -> NaiveDate {
        self.0
    }
}
