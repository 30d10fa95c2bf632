use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use time::{OffsetDateTime, UtcOffset};

/// Convert a stored UTC timestamp into the display time zone.
pub fn localized_datetime(time: OffsetDateTime, tz: Tz) -> DateTime<Tz> {
    let utc = time.to_offset(UtcOffset::UTC);
    let seconds = utc.unix_timestamp();
    let nanos: u32 = utc.nanosecond();
    let datetime_utc = DateTime::<Utc>::from_timestamp(seconds, nanos)
        .or_else(|| DateTime::<Utc>::from_timestamp(seconds, 0))
        .unwrap_or_default();
    tz.from_utc_datetime(&datetime_utc.naive_utc())
}

/// The current instant in the display time zone.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    localized_datetime(OffsetDateTime::now_utc(), tz)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use time::macros::datetime;

    use super::*;

    #[test]
    fn converts_utc_into_named_zone() {
        let stored = datetime!(2026-01-01 03:30:00 UTC);
        let local = localized_datetime(stored, chrono_tz::America::New_York);

        assert_eq!(local.year(), 2025);
        assert_eq!(local.month(), 12);
        assert_eq!(local.day(), 31);
        assert_eq!(local.hour(), 22);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn non_utc_offsets_are_normalised_first() {
        let stored = datetime!(2026-10-16 17:04:05 +02:00);
        let local = localized_datetime(stored, Tz::UTC);

        assert_eq!(local.hour(), 15);
        assert_eq!(local.second(), 5);
    }
}
