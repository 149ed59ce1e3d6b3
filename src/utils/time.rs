use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current calendar date in UTC, used as the default repair date.
pub fn today() -> NaiveDate {
    now().date_naive()
}
