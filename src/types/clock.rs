//! Timestamp helpers for the seeded dataset
//!
//! The production application parses timestamps with a parser that accepts
//! no UTC offset, so everything written to the store is an offset-naive
//! ISO-8601 string at seconds precision.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// Current UTC wall-clock time with the offset stripped.
pub fn utc_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Today's UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The calendar year used to stamp identifiers.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Format a datetime the way the store expects it: ISO-8601, seconds
/// precision, no offset.
pub fn iso_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Now shifted by a signed number of days, formatted for the store.
pub fn iso_now(offset_days: i64) -> String {
    iso_timestamp(utc_now() + Duration::days(offset_days))
}
