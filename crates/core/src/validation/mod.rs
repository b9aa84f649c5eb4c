//! Boundary validation for wheel configuration.
//!
//! Runs at wheel save/edit time so corrupt configuration surfaces in the
//! dashboard instead of at spin time. Evaluation never assumes these checks
//! ran; it stays fail-open on malformed input.

use std::collections::BTreeSet;

use chrono_tz::Tz;
use thiserror::Error;

use crate::model::{ScheduleConfig, Segment, Wheel};

const MAX_MINUTES: u16 = 1439;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("wheel {wheel_id} has no segments")]
    NoSegments { wheel_id: String },
    #[error("segment {segment_id} has non-positive weight {weight}")]
    NonPositiveWeight { segment_id: String, weight: f64 },
    #[error("duplicate segment id: {segment_id}")]
    DuplicateSegmentId { segment_id: String },
    #[error("segment {segment_id} has negative inventory {inventory}")]
    NegativeInventory { segment_id: String, inventory: i64 },
    #[error("unknown timezone: {timezone}")]
    UnknownTimezone { timezone: String },
    #[error("week day {day} outside 1..=7")]
    InvalidWeekDay { day: u8 },
    #[error("time slot minute {minutes} outside 0..=1439")]
    TimeSlotOutOfRange { minutes: u16 },
    #[error("time slot starts at {start_minutes} after it ends at {end_minutes}")]
    InvertedTimeSlot { start_minutes: u16, end_minutes: u16 },
    #[error("unparsable date bound: {value}")]
    InvalidDateBound { value: String },
}

pub fn validate_wheel(wheel: &Wheel) -> Result<(), ValidationError> {
    validate_segments(&wheel.id, &wheel.segments)?;
    if let Some(schedule) = &wheel.schedule {
        validate_schedule(schedule)?;
    }
    Ok(())
}

pub fn validate_segments(wheel_id: &str, segments: &[Segment]) -> Result<(), ValidationError> {
    if segments.is_empty() {
        return Err(ValidationError::NoSegments {
            wheel_id: wheel_id.to_string(),
        });
    }

    let mut seen = BTreeSet::new();
    for segment in segments {
        if !seen.insert(segment.id.as_str()) {
            return Err(ValidationError::DuplicateSegmentId {
                segment_id: segment.id.clone(),
            });
        }
        if !segment.weight.is_finite() || segment.weight <= 0.0 {
            return Err(ValidationError::NonPositiveWeight {
                segment_id: segment.id.clone(),
                weight: segment.weight,
            });
        }
        if let Some(inventory) = segment.inventory {
            if inventory < 0 {
                return Err(ValidationError::NegativeInventory {
                    segment_id: segment.id.clone(),
                    inventory,
                });
            }
        }
    }
    Ok(())
}

/// Schedules are validated even when disabled: a store owner flipping one on
/// later should not discover a bad zone id at spin time.
pub fn validate_schedule(schedule: &ScheduleConfig) -> Result<(), ValidationError> {
    if schedule.timezone.parse::<Tz>().is_err() {
        return Err(ValidationError::UnknownTimezone {
            timezone: schedule.timezone.clone(),
        });
    }

    for bound in [&schedule.date_range.start_date, &schedule.date_range.end_date]
        .into_iter()
        .flatten()
    {
        let rfc3339 = chrono::DateTime::parse_from_rfc3339(bound).is_ok();
        let bare_date = bound.parse::<chrono::NaiveDate>().is_ok();
        if !rfc3339 && !bare_date {
            return Err(ValidationError::InvalidDateBound {
                value: bound.clone(),
            });
        }
    }

    for &day in &schedule.week_days.days {
        if !(1..=7).contains(&day) {
            return Err(ValidationError::InvalidWeekDay { day });
        }
    }

    for slot in &schedule.time_slots.slots {
        for minutes in [slot.start_minutes, slot.end_minutes] {
            if minutes > MAX_MINUTES {
                return Err(ValidationError::TimeSlotOutOfRange { minutes });
            }
        }
        if slot.start_minutes > slot.end_minutes {
            return Err(ValidationError::InvertedTimeSlot {
                start_minutes: slot.start_minutes,
                end_minutes: slot.end_minutes,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TimeSlot, TimeSlots, WeekDays};
    use std::collections::BTreeSet;

    fn make_segment(id: &str, weight: f64) -> Segment {
        Segment {
            id: id.to_string(),
            label: id.to_string(),
            value: id.to_uppercase(),
            color: "#009688".to_string(),
            weight,
            enabled: None,
            inventory: None,
        }
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert_eq!(
            validate_segments("w1", &[]),
            Err(ValidationError::NoSegments {
                wheel_id: "w1".to_string()
            })
        );
    }

    #[test]
    fn test_zero_weight_rejected() {
        let segments = vec![make_segment("s0", 0.0)];
        assert!(matches!(
            validate_segments("w1", &segments),
            Err(ValidationError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let segments = vec![make_segment("s0", f64::NAN)];
        assert!(matches!(
            validate_segments("w1", &segments),
            Err(ValidationError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let segments = vec![make_segment("s0", 1.0), make_segment("s0", 2.0)];
        assert!(matches!(
            validate_segments("w1", &segments),
            Err(ValidationError::DuplicateSegmentId { .. })
        ));
    }

    #[test]
    fn test_negative_inventory_rejected() {
        let mut segment = make_segment("s0", 1.0);
        segment.inventory = Some(-1);
        assert!(matches!(
            validate_segments("w1", &[segment]),
            Err(ValidationError::NegativeInventory { .. })
        ));
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let schedule = ScheduleConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::UnknownTimezone { .. })
        ));
    }

    #[test]
    fn test_weekday_out_of_range_rejected() {
        let schedule = ScheduleConfig {
            week_days: WeekDays {
                enabled: true,
                days: BTreeSet::from([0]),
            },
            ..ScheduleConfig::default()
        };
        assert_eq!(
            validate_schedule(&schedule),
            Err(ValidationError::InvalidWeekDay { day: 0 })
        );
    }

    #[test]
    fn test_inverted_time_slot_rejected() {
        let schedule = ScheduleConfig {
            time_slots: TimeSlots {
                enabled: true,
                slots: vec![TimeSlot {
                    start_minutes: 1080,
                    end_minutes: 540,
                    label: None,
                }],
            },
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::InvertedTimeSlot { .. })
        ));
    }

    #[test]
    fn test_slot_minute_out_of_range_rejected() {
        let schedule = ScheduleConfig {
            time_slots: TimeSlots {
                enabled: true,
                slots: vec![TimeSlot {
                    start_minutes: 0,
                    end_minutes: 1440,
                    label: None,
                }],
            },
            ..ScheduleConfig::default()
        };
        assert_eq!(
            validate_schedule(&schedule),
            Err(ValidationError::TimeSlotOutOfRange { minutes: 1440 })
        );
    }

    #[test]
    fn test_unparsable_date_bound_rejected() {
        let schedule = ScheduleConfig {
            date_range: crate::model::DateRange {
                start_date: Some("06/01/2025".to_string()),
                end_date: None,
            },
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            validate_schedule(&schedule),
            Err(ValidationError::InvalidDateBound { .. })
        ));
    }

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(validate_schedule(&ScheduleConfig::default()).is_ok());
    }
}
