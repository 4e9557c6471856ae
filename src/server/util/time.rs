//! Current time in the configured slot time zone.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Returns the current instant expressed in `offset`.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Returns today's calendar date in `offset`.
pub fn today_in(offset: FixedOffset) -> NaiveDate {
    now_in(offset).date_naive()
}
