//! Due evaluation for recurrence rules.
//!
//! Answers two independent questions about a rule on a given day: "does this
//! belong in the Due list" and "does this belong in the Not-Due list". The
//! predicates are not strict negations of each other by contract; callers
//! must use the one matching their question rather than deriving `!other`.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::recurrence::{RecurrenceRule, RepeatCadence};

/// Whether the rule is due on `today`.
///
/// Evaluation order: resolved flags, then missing anchor, then not-yet
/// started, then the cadence dispatch.
pub fn is_due(rule: &RecurrenceRule, today: NaiveDate) -> bool {
    if rule.is_resolved() {
        return false;
    }
    match rule.start_date {
        // An un-anchored task is always actionable.
        None => true,
        Some(start) if start > today => false,
        Some(start) => cadence_matches(rule, start, today),
    }
}

/// Whether the rule is explicitly not due on `today`.
///
/// The complement is taken only at the cadence dispatch; the resolved and
/// not-started branches answer for themselves.
pub fn is_not_due(rule: &RecurrenceRule, today: NaiveDate) -> bool {
    if rule.is_resolved() {
        return true;
    }
    match rule.start_date {
        None => false,
        Some(start) if start > today => true,
        Some(start) => !cadence_matches(rule, start, today),
    }
}

/// The cadence-specific due check, once the rule is known to be unresolved
/// and started.
fn cadence_matches(rule: &RecurrenceRule, start: NaiveDate, today: NaiveDate) -> bool {
    match &rule.cadence {
        RepeatCadence::Daily => true,
        RepeatCadence::Weekly { on } if on.is_empty() => {
            let interval = 7 * i64::from(rule.every.max(1));
            (today - start).num_days() % interval == 0
        }
        // Non-empty day sets match every listed weekday in every week;
        // `every` participates only in next-occurrence wrapping.
        RepeatCadence::Weekly { on } => on.contains(&today.weekday().num_days_from_sunday()),
        RepeatCadence::Monthly { on } if on.is_empty() => today.day() == start.day(),
        RepeatCadence::Monthly { on } => on.contains(&today.day()),
        RepeatCadence::Unknown(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_from(start: NaiveDate) -> RecurrenceRule {
        RecurrenceRule::new(RepeatCadence::Daily).with_start_date(start)
    }

    #[test]
    fn test_completed_task_is_never_due() {
        let rule = daily_from(date(2024, 1, 1)).with_completed(true);
        let today = date(2024, 3, 15);
        assert!(!is_due(&rule, today));
        assert!(is_not_due(&rule, today));
    }

    #[test]
    fn test_skipped_task_is_never_due() {
        let rule = daily_from(date(2024, 1, 1)).with_skipped(true);
        let today = date(2024, 3, 15);
        assert!(!is_due(&rule, today));
        assert!(is_not_due(&rule, today));
    }

    #[test]
    fn test_missing_start_date_is_always_due() {
        let rule = RecurrenceRule::new(RepeatCadence::Monthly {
            on: BTreeSet::from([15]),
        });
        let today = date(2024, 3, 1);
        assert!(is_due(&rule, today));
        assert!(!is_not_due(&rule, today));
    }

    #[test]
    fn test_future_start_date_is_not_due() {
        let rule = daily_from(date(2024, 6, 1));
        let today = date(2024, 3, 15);
        assert!(!is_due(&rule, today));
        assert!(is_not_due(&rule, today));
    }

    #[test]
    fn test_daily_due_from_start_onward() {
        let rule = daily_from(date(2024, 1, 1));
        assert!(is_due(&rule, date(2024, 1, 1)));
        assert!(is_due(&rule, date(2024, 1, 2)));
        assert!(is_due(&rule, date(2025, 7, 30)));
    }

    #[test]
    fn test_weekly_interval_counting_with_empty_day_set() {
        // Every 2 weeks from Monday 2024-01-01.
        let rule = RecurrenceRule::new(RepeatCadence::Weekly { on: BTreeSet::new() })
            .with_start_date(date(2024, 1, 1))
            .with_every(2);

        assert!(is_due(&rule, date(2024, 1, 1)));
        // One week later: 7 days is not divisible by 14.
        assert!(!is_due(&rule, date(2024, 1, 8)));
        assert!(is_not_due(&rule, date(2024, 1, 8)));
        // Two weeks later.
        assert!(is_due(&rule, date(2024, 1, 15)));
    }

    #[test]
    fn test_weekly_day_set_matches_listed_weekdays_only() {
        // Mon/Wed/Fri from Monday 2024-01-01.
        let rule = RecurrenceRule::new(RepeatCadence::Weekly {
            on: BTreeSet::from([1, 3, 5]),
        })
        .with_start_date(date(2024, 1, 1));

        assert!(is_due(&rule, date(2024, 1, 1))); // Monday
        assert!(!is_due(&rule, date(2024, 1, 2))); // Tuesday
        assert!(is_due(&rule, date(2024, 1, 3))); // Wednesday
        assert!(!is_due(&rule, date(2024, 1, 4))); // Thursday
        assert!(is_due(&rule, date(2024, 1, 5))); // Friday
        assert!(!is_due(&rule, date(2024, 1, 6))); // Saturday
        assert!(!is_due(&rule, date(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_weekly_day_set_ignores_every() {
        // "Every 2 weeks on Monday" with an explicit day set fires weekly.
        let rule = RecurrenceRule::new(RepeatCadence::Weekly {
            on: BTreeSet::from([1]),
        })
        .with_start_date(date(2024, 1, 1))
        .with_every(2);

        assert!(is_due(&rule, date(2024, 1, 8)));
        assert!(is_due(&rule, date(2024, 1, 15)));
    }

    #[test]
    fn test_monthly_empty_set_matches_start_day_of_month() {
        let rule = RecurrenceRule::new(RepeatCadence::Monthly { on: BTreeSet::new() })
            .with_start_date(date(2024, 1, 1));

        assert!(is_due(&rule, date(2024, 3, 1)));
        assert!(!is_due(&rule, date(2024, 3, 2)));
        assert!(is_not_due(&rule, date(2024, 3, 2)));
    }

    #[test]
    fn test_monthly_day_set_matches_listed_days() {
        let rule = RecurrenceRule::new(RepeatCadence::Monthly {
            on: BTreeSet::from([10, 20]),
        })
        .with_start_date(date(2024, 1, 1));

        assert!(is_due(&rule, date(2024, 2, 10)));
        assert!(is_due(&rule, date(2024, 2, 20)));
        assert!(!is_due(&rule, date(2024, 2, 11)));
    }

    #[test]
    fn test_unknown_cadence_is_due_once_started() {
        let rule = RecurrenceRule::new(RepeatCadence::Unknown("fortnightly".to_string()))
            .with_start_date(date(2024, 1, 1));
        assert!(is_due(&rule, date(2024, 1, 2)));
        assert!(!is_not_due(&rule, date(2024, 1, 2)));
    }
}
