//! Narrowing several wheels down to the one the storefront shows.

use chrono::{DateTime, Utc};

use crate::model::Wheel;
use crate::schedule::evaluator::is_active;

/// Pick the wheel to display among all of a store's wheels.
///
/// Among the active wheels, the one with the highest `priority` is the
/// prioritized finalist (ties broken by newest `created_at`), and the most
/// recently created wheel without a priority is the unprioritized finalist.
/// The two finalists are then resolved by recency, so a freshly created
/// campaign that never set a priority can still take over from an old
/// prioritized one, but a higher priority always beats a lower one. The
/// result does not depend on the order of `wheels`. Returns `None` when
/// nothing is active (the serving layer turns that into a "nothing to show"
/// response).
pub fn select_active_wheel(wheels: &[Wheel], now: DateTime<Utc>) -> Option<&Wheel> {
    let mut prioritized: Option<(i32, &Wheel)> = None;
    let mut unprioritized: Option<&Wheel> = None;
    for wheel in wheels
        .iter()
        .filter(|wheel| is_active(wheel.schedule.as_ref(), now))
    {
        match wheel.priority {
            Some(priority) => {
                let beats = prioritized.map_or(true, |(current, best)| {
                    priority > current
                        || (priority == current && wheel.created_at > best.created_at)
                });
                if beats {
                    prioritized = Some((priority, wheel));
                }
            }
            None => {
                if unprioritized.map_or(true, |best| wheel.created_at > best.created_at) {
                    unprioritized = Some(wheel);
                }
            }
        }
    }
    match (prioritized, unprioritized) {
        (Some((_, with)), Some(without)) => {
            if without.created_at > with.created_at {
                Some(without)
            } else {
                Some(with)
            }
        }
        (with, without) => with.map(|(_, wheel)| wheel).or(without),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScheduleConfig, Segment};

    fn utc(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn make_wheel(id: &str, priority: Option<i32>, created_at: &str) -> Wheel {
        Wheel {
            id: id.to_string(),
            name: id.to_string(),
            priority,
            created_at: utc(created_at),
            schedule: None,
            segments: vec![Segment {
                id: format!("{id}-s0"),
                label: "10% off".to_string(),
                value: "SAVE10".to_string(),
                color: "#ff5722".to_string(),
                weight: 1.0,
                enabled: None,
                inventory: None,
            }],
        }
    }

    #[test]
    fn test_no_wheels_returns_none() {
        assert!(select_active_wheel(&[], utc("2025-01-06T12:00:00Z")).is_none());
    }

    #[test]
    fn test_inactive_wheels_are_skipped() {
        let mut wheel = make_wheel("w1", None, "2025-01-01T00:00:00Z");
        wheel.schedule = Some(ScheduleConfig {
            enabled: true,
            date_range: crate::model::DateRange {
                start_date: Some("2030-01-01T00:00:00Z".to_string()),
                end_date: None,
            },
            ..ScheduleConfig::default()
        });
        assert!(select_active_wheel(&[wheel], utc("2025-01-06T12:00:00Z")).is_none());
    }

    #[test]
    fn test_priority_beats_recency() {
        let older_high = make_wheel("older", Some(5), "2025-01-01T00:00:00Z");
        let newer_low = make_wheel("newer", Some(1), "2025-06-01T00:00:00Z");
        let wheels = [newer_low.clone(), older_high.clone()];
        let picked = select_active_wheel(&wheels, utc("2025-07-01T00:00:00Z")).unwrap();
        assert_eq!(picked.id, "older");

        // Same outcome with the slice in the other order.
        let wheels = [older_high, newer_low];
        let picked = select_active_wheel(&wheels, utc("2025-07-01T00:00:00Z")).unwrap();
        assert_eq!(picked.id, "older");
    }

    #[test]
    fn test_equal_priority_falls_back_to_newest() {
        let older = make_wheel("older", Some(3), "2025-01-01T00:00:00Z");
        let newer = make_wheel("newer", Some(3), "2025-06-01T00:00:00Z");
        let wheels = [older, newer];
        let picked = select_active_wheel(&wheels, utc("2025-07-01T00:00:00Z")).unwrap();
        assert_eq!(picked.id, "newer");
    }

    #[test]
    fn test_mixed_priorities_resolve_the_same_in_any_order() {
        // A low-priority newest wheel, a high-priority oldest wheel, and an
        // unprioritized wheel in between. The unprioritized wheel outlives
        // the high-priority one on recency; the low-priority wheel must
        // never be the pick, whatever the slice order.
        let low_new = make_wheel("low", Some(1), "2025-06-01T00:00:00Z");
        let high_old = make_wheel("high", Some(5), "2025-01-01T00:00:00Z");
        let plain_mid = make_wheel("plain", None, "2025-03-01T00:00:00Z");
        let now = utc("2025-07-01T00:00:00Z");
        for order in [
            [low_new.clone(), high_old.clone(), plain_mid.clone()],
            [high_old.clone(), plain_mid.clone(), low_new.clone()],
            [plain_mid, low_new, high_old],
        ] {
            let picked = select_active_wheel(&order, now).unwrap();
            assert_eq!(picked.id, "plain");
        }
    }

    #[test]
    fn test_priority_beats_recency_with_an_older_plain_wheel_present() {
        let low_new = make_wheel("low", Some(1), "2025-06-01T00:00:00Z");
        let high_mid = make_wheel("high", Some(5), "2025-03-01T00:00:00Z");
        let plain_old = make_wheel("plain", None, "2025-01-01T00:00:00Z");
        let wheels = [low_new, high_mid, plain_old];
        let picked = select_active_wheel(&wheels, utc("2025-07-01T00:00:00Z")).unwrap();
        assert_eq!(picked.id, "high");
    }

    #[test]
    fn test_missing_priority_on_either_side_uses_recency() {
        let prioritized_old = make_wheel("old", Some(9), "2025-01-01T00:00:00Z");
        let unprioritized_new = make_wheel("new", None, "2025-06-01T00:00:00Z");
        let wheels = [prioritized_old, unprioritized_new];
        let picked = select_active_wheel(&wheels, utc("2025-07-01T00:00:00Z")).unwrap();
        assert_eq!(picked.id, "new");
    }
}
