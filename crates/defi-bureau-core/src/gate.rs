//! Work-hours gate.
//!
//! The gate is a pure function of wall-clock time: given an instant it
//! decides whether stand-up scoring is currently permitted and, when it is
//! not, produces a human-readable advisory. It holds no state and performs
//! no IO; callers cache the decision and re-evaluate once per minute.
//!
//! All comparisons use local time truncated to minute resolution
//! (`hour * 60 + minute`). Both ends of each window are inclusive.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Work-hours window, in minutes since midnight.
///
/// Friday closes earlier than the rest of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHoursPolicy {
    #[serde(default = "default_start_min")]
    pub start_min: u16,
    #[serde(default = "default_end_min")]
    pub end_min: u16,
    #[serde(default = "default_friday_end_min")]
    pub friday_end_min: u16,
}

fn default_start_min() -> u16 {
    8 * 60 + 45
}
fn default_end_min() -> u16 {
    16 * 60 + 40
}
fn default_friday_end_min() -> u16 {
    16 * 60 + 30
}

impl Default for WorkHoursPolicy {
    fn default() -> Self {
        Self {
            start_min: default_start_min(),
            end_min: default_end_min(),
            friday_end_min: default_friday_end_min(),
        }
    }
}

/// Whether scoring is currently permitted, with an advisory when it is not.
///
/// Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl GateDecision {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn blocked(reason: String) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Format minutes-since-midnight as `HH:MM`.
fn clock(min: u16) -> String {
    format!("{:02}:{:02}", min / 60, min % 60)
}

/// Evaluate the gate at `now`. Rules in order, first match wins:
///
/// 1. Weekend: blocked.
/// 2. Friday outside `[start, friday_end]`: blocked.
/// 3. Any other weekday outside `[start, end]`: blocked.
/// 4. Otherwise allowed.
pub fn evaluate(now: NaiveDateTime, policy: &WorkHoursPolicy) -> GateDecision {
    let minute = (now.hour() * 60 + now.minute()) as u16;
    match now.weekday() {
        Weekday::Sat | Weekday::Sun => {
            GateDecision::blocked("challenge active only on weekdays".to_string())
        }
        Weekday::Fri if minute < policy.start_min || minute > policy.friday_end_min => {
            GateDecision::blocked(format!(
                "on Friday, active {}\u{2013}{}",
                clock(policy.start_min),
                clock(policy.friday_end_min)
            ))
        }
        Weekday::Fri => GateDecision::allowed(),
        _ if minute < policy.start_min || minute > policy.end_min => GateDecision::blocked(
            format!("active {}\u{2013}{}", clock(policy.start_min), clock(policy.end_min)),
        ),
        _ => GateDecision::allowed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    // 2025-01-01 is a Wednesday, 2025-01-03 a Friday, 2025-01-04 a Saturday.

    #[test]
    fn weekend_is_blocked() {
        let policy = WorkHoursPolicy::default();
        let saturday = evaluate(at(2025, 1, 4, 12, 0), &policy);
        assert!(!saturday.allowed);
        assert_eq!(
            saturday.reason.as_deref(),
            Some("challenge active only on weekdays")
        );

        let sunday = evaluate(at(2025, 1, 5, 10, 30), &policy);
        assert!(!sunday.allowed);
    }

    #[test]
    fn weekday_window_boundaries_are_inclusive() {
        let policy = WorkHoursPolicy::default();
        assert!(!evaluate(at(2025, 1, 1, 8, 44), &policy).allowed);
        assert!(evaluate(at(2025, 1, 1, 8, 45), &policy).allowed);
        assert!(evaluate(at(2025, 1, 1, 16, 40), &policy).allowed);
        assert!(!evaluate(at(2025, 1, 1, 16, 41), &policy).allowed);
    }

    #[test]
    fn weekday_outside_window_names_the_window() {
        let policy = WorkHoursPolicy::default();
        let decision = evaluate(at(2025, 1, 1, 7, 0), &policy);
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some("active 08:45\u{2013}16:40"));
    }

    #[test]
    fn friday_closes_earlier() {
        let policy = WorkHoursPolicy::default();
        assert!(evaluate(at(2025, 1, 3, 16, 30), &policy).allowed);

        let late = evaluate(at(2025, 1, 3, 16, 31), &policy);
        assert!(!late.allowed);
        assert_eq!(
            late.reason.as_deref(),
            Some("on Friday, active 08:45\u{2013}16:30")
        );

        let early = evaluate(at(2025, 1, 3, 8, 44), &policy);
        assert!(!early.allowed);
    }

    #[test]
    fn friday_16_45_is_blocked_with_friday_advisory() {
        let policy = WorkHoursPolicy::default();
        let decision = evaluate(at(2025, 1, 3, 16, 45), &policy);
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().contains("Friday"));
    }

    #[test]
    fn custom_policy_is_honored() {
        let policy = WorkHoursPolicy {
            start_min: 9 * 60,
            end_min: 17 * 60,
            friday_end_min: 15 * 60,
        };
        assert!(!evaluate(at(2025, 1, 1, 8, 45), &policy).allowed);
        assert!(evaluate(at(2025, 1, 1, 9, 0), &policy).allowed);
        assert!(!evaluate(at(2025, 1, 3, 15, 1), &policy).allowed);
    }

    proptest! {
        #[test]
        fn any_weekend_minute_is_blocked(day in 4u32..=5, hour in 0u32..24, minute in 0u32..60) {
            // 2025-01-04 Saturday, 2025-01-05 Sunday.
            let decision = evaluate(at(2025, 1, day, hour, minute), &WorkHoursPolicy::default());
            prop_assert!(!decision.allowed);
        }

        #[test]
        fn any_in_window_weekday_minute_is_allowed(
            day_offset in 0u32..4,
            minute_of_day in (8 * 60 + 45) as u32..=(16 * 60 + 40) as u32,
        ) {
            // 2024-12-30 is a Monday; offsets 0..4 cover Monday through Thursday.
            let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
                + chrono::Days::new(day_offset as u64);
            let now = date
                .and_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
                .unwrap();
            let decision = evaluate(now, &WorkHoursPolicy::default());
            prop_assert!(decision.allowed);
            prop_assert!(decision.reason.is_none());
        }
    }
}
