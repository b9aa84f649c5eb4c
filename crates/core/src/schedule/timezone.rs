//! Wall-clock conversion for schedule evaluation.
//!
//! All zone math happens here, once per evaluation: the rest of the
//! evaluator compares fields of the resulting snapshot and never touches
//! timezones again.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// A single instant viewed through a schedule's zone.
///
/// `instant` stays absolute (date-range bounds compare on the epoch, not on
/// calendar fields); the remaining fields are the local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub instant: DateTime<Utc>,
    pub date: NaiveDate,
    /// ISO weekday, 1=Monday .. 7=Sunday.
    pub iso_weekday: u8,
    pub minutes_since_midnight: u16,
}

/// Convert `now` into `timezone`. An unknown zone id must not break
/// storefront rendering, so it degrades to evaluating the UTC wall clock
/// with a warning.
pub fn localize(now: DateTime<Utc>, timezone: &str) -> LocalMoment {
    match timezone.parse::<Tz>() {
        Ok(zone) => snapshot(now, &now.with_timezone(&zone)),
        Err(_) => {
            warn!(timezone, "unknown timezone; evaluating schedule in UTC");
            snapshot(now, &now)
        }
    }
}

fn snapshot<Z: TimeZone>(instant: DateTime<Utc>, local: &DateTime<Z>) -> LocalMoment {
    LocalMoment {
        instant,
        date: local.date_naive(),
        iso_weekday: local.weekday().number_from_monday() as u8,
        minutes_since_midnight: (local.hour() * 60 + local.minute()) as u16,
    }
}
