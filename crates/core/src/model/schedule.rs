use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_timezone() -> String {
    "UTC".to_string()
}

/// When a wheel may be shown. With `enabled = false` the whole schedule is
/// ignored and the wheel is always active; with `enabled = true` every
/// sub-check that is itself disabled or empty is skipped, so an empty
/// schedule never narrows eligibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub enabled: bool,
    /// IANA zone id, e.g. "America/Argentina/Buenos_Aires". All weekday and
    /// time-of-day checks are evaluated in this zone.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub week_days: WeekDays,
    #[serde(default)]
    pub time_slots: TimeSlots,
    #[serde(default)]
    pub special_dates: SpecialDates,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timezone: default_timezone(),
            date_range: DateRange::default(),
            week_days: WeekDays::default(),
            time_slots: TimeSlots::default(),
            special_dates: SpecialDates::default(),
        }
    }
}

/// Absolute validity window. Bounds are RFC 3339 instants (a bare
/// `YYYY-MM-DD` is read as midnight UTC); a missing bound is unbounded on
/// that side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Allowed weekdays, ISO numbering: 1=Monday .. 7=Sunday.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekDays {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub days: BTreeSet<u8>,
}

/// Allowed minute-of-day windows. A moment is valid if it falls in ANY slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlots {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

/// Inclusive on both bounds: `{540, 1080}` covers 09:00 through 18:00.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_minutes: u16,
    pub end_minutes: u16,
    #[serde(default)]
    pub label: Option<String>,
}

/// Date-level overrides, evaluated before weekday and time-slot checks.
/// Whitelist short-circuits to active, blacklist to inactive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialDates {
    #[serde(default)]
    pub blacklist_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub whitelist_dates: BTreeSet<NaiveDate>,
}
