//! Next-occurrence calculation for recurrence rules.
//!
//! Given a rule and a caller-supplied `today`, computes the calendar date of
//! the rule's next occurrence. Pure and deterministic; the returned date
//! always satisfies the rule's own constraints, with day-of-month values
//! clamped to the length of the target month.

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::models::recurrence::{RecurrenceRule, RepeatCadence};
use crate::services::due_evaluator;

/// The date of the rule's next occurrence on or after `today`.
///
/// A rule that is unresolved and due today answers `today`; a rule that has
/// not started yet answers its start date; otherwise the cadence advances
/// from `today`.
pub fn next_occurrence(rule: &RecurrenceRule, today: NaiveDate) -> NaiveDate {
    let Some(start) = rule.start_date else {
        return if rule.is_resolved() {
            days_after(today, 1)
        } else {
            today
        };
    };

    if start > today {
        return start;
    }

    if !rule.is_resolved() && due_evaluator::is_due(rule, today) {
        return today;
    }

    let every = rule.every.max(1);
    match &rule.cadence {
        RepeatCadence::Daily => days_after(today, every),
        RepeatCadence::Weekly { on } if on.is_empty() => days_after(today, 7 * every),
        RepeatCadence::Weekly { on } => {
            let weekday = today.weekday().num_days_from_sunday();
            match on.iter().find(|&&d| d > weekday) {
                // A later weekday this week.
                Some(&next) => days_after(today, next - weekday),
                // Wrap: skip to the week `every - 1` weeks past the coming
                // Sunday, then land on the earliest listed weekday (0 being
                // that Sunday itself).
                None => {
                    let earliest = on.iter().next().copied().unwrap_or(0);
                    days_after(today, (7 - weekday) + (every - 1) * 7 + earliest)
                }
            }
        }
        RepeatCadence::Monthly { on } if on.is_empty() => {
            let (year, month) = months_after(today.year(), today.month(), every);
            clamped_ymd(year, month, start.day())
        }
        RepeatCadence::Monthly { on } => {
            let day = today.day();
            let last = days_in_month(today.year(), today.month());
            // A later listed day this month, clamped to the month's length
            // (a 31 in February lands on the 28th/29th).
            let this_month = on
                .iter()
                .find(|&&d| d > day)
                .map(|&d| d.min(last))
                .filter(|&d| d > day);
            match this_month {
                Some(d) => clamped_ymd(today.year(), today.month(), d),
                None => {
                    let earliest = on.iter().next().copied().unwrap_or(1);
                    let (year, month) = months_after(today.year(), today.month(), every);
                    clamped_ymd(year, month, earliest)
                }
            }
        }
        RepeatCadence::Unknown(_) => days_after(today, 1),
    }
}

// ---------------------------------------------------------------------------
// Calendar helpers
// ---------------------------------------------------------------------------

fn days_after(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days))).unwrap_or(date)
}

/// Advance `months` months, carrying into the year.
fn months_after(year: i32, month: u32, months: u32) -> (i32, u32) {
    let zero_based = (month - 1) + months;
    (year + i32::try_from(zero_based / 12).unwrap_or(0), zero_based % 12 + 1)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Build a date with the day clamped into the month's valid range.
fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
