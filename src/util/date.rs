//! Display formatting for dates shown on journal pages.
//!
//! The `current_*` functions evaluate the clock at call time; the rest are pure
//! over the supplied instant. None of these strings feed back into business logic.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use time::OffsetDateTime;

use super::timezone::{localized_datetime, now_in};

const LONG_DATE_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn year<T: TimeZone>(at: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    at.format("%Y").to_string()
}

pub fn day<T: TimeZone>(at: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    at.format("%-d").to_string()
}

/// "October 16, 2026 at 3:04 PM"
pub fn date_long<T: TimeZone>(at: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    at.format(LONG_DATE_FORMAT).to_string()
}

/// "10/16/2026, 3:04:05 PM"
pub fn timestamp<T: TimeZone>(at: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn current_year(tz: Tz) -> String {
    year(&now_in(tz))
}

pub fn current_day(tz: Tz) -> String {
    day(&now_in(tz))
}

pub fn current_date_long(tz: Tz) -> String {
    date_long(&now_in(tz))
}

/// Format a stored post timestamp for the detail page.
pub fn post_timestamp(date: OffsetDateTime, tz: Tz) -> String {
    timestamp(&localized_datetime(date, tz))
}

/// Format a stored post timestamp for the home page listing.
pub fn post_date_long(date: OffsetDateTime, tz: Tz) -> String {
    date_long(&localized_datetime(date, tz))
}
