//! Campaign eligibility: decides whether a wheel may be shown right now.
//!
//! Every check short-circuits to inactive on failure, but malformed input
//! (unknown zone, unparsable date bound) fails OPEN: a broken schedule makes
//! the wheel more available, never a storefront error.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::warn;

use crate::model::{DateRange, ScheduleConfig, SpecialDates, TimeSlots, WeekDays};
use crate::schedule::timezone::localize;

/// Evaluate a schedule at `now`.
///
/// A missing or disabled schedule is always active. With the schedule
/// enabled, the checks run in order: date range (absolute instants), special
/// dates (whitelist wins, then blacklist), weekdays, time slots. Sub-checks
/// that are disabled or empty never narrow eligibility.
pub fn is_active(schedule: Option<&ScheduleConfig>, now: DateTime<Utc>) -> bool {
    let Some(schedule) = schedule else {
        return true;
    };
    if !schedule.enabled {
        return true;
    }

    let moment = localize(now, &schedule.timezone);

    if !within_date_range(&schedule.date_range, moment.instant) {
        return false;
    }
    if let Some(active) = special_date_override(&schedule.special_dates, moment.date) {
        return active;
    }
    if !allowed_weekday(&schedule.week_days, moment.iso_weekday) {
        return false;
    }
    within_time_slots(&schedule.time_slots, moment.minutes_since_midnight)
}

fn within_date_range(range: &DateRange, instant: DateTime<Utc>) -> bool {
    if let Some(start) = parse_bound(range.start_date.as_deref()) {
        if instant < start {
            return false;
        }
    }
    if let Some(end) = parse_bound(range.end_date.as_deref()) {
        if instant > end {
            return false;
        }
    }
    true
}

/// RFC 3339 instant, or a bare date read as midnight UTC. An unparsable
/// bound drops that side of the window (fail open).
fn parse_bound(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    warn!(bound = raw, "unparsable date bound; skipping this check");
    None
}

/// Whitelist short-circuits to active, blacklist to inactive; both override
/// the weekday and time-slot checks below them.
fn special_date_override(special: &SpecialDates, local_date: NaiveDate) -> Option<bool> {
    if special.whitelist_dates.contains(&local_date) {
        return Some(true);
    }
    if special.blacklist_dates.contains(&local_date) {
        return Some(false);
    }
    None
}

fn allowed_weekday(week_days: &WeekDays, iso_weekday: u8) -> bool {
    if !week_days.enabled || week_days.days.is_empty() {
        return true;
    }
    week_days.days.contains(&iso_weekday)
}

/// Inclusive on both slot bounds; any slot matching is enough.
fn within_time_slots(time_slots: &TimeSlots, minutes: u16) -> bool {
    if !time_slots.enabled || time_slots.slots.is_empty() {
        return true;
    }
    time_slots
        .slots
        .iter()
        .any(|slot| slot.start_minutes <= minutes && minutes <= slot.end_minutes)
}
