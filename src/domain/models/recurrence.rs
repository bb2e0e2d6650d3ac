//! Recurrence rule domain model.
//!
//! A `RecurrenceRule` describes the cadence of a repeating task: its anchor
//! date, how often it repeats, and (for weekly/monthly cadences) which
//! weekdays or days-of-month it lands on. The backing store delivers these
//! fields loosely typed -- legacy records carry a bare repeat-type string,
//! newer ones a structured object -- so `RawRecurrence` normalizes the shape
//! once at the boundary and the engine only ever sees the normalized rule.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::errors::{DomainError, DomainResult};

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// How a repeating task recurs.
///
/// A closed enumeration: one evaluation arm per variant, exhaustiveness
/// checked by the compiler. Weekday indices use 0 = Sunday .. 6 = Saturday;
/// day-of-month values are 1..=31.
///
/// Compatibility note: for `Weekly`/`Monthly` with a non-empty `on` set, the
/// due check matches every listed weekday/day-of-month in every week/month.
/// The rule's `every` interval only participates when the next-occurrence
/// calculation wraps past the current week or month. This mirrors the
/// behavior user-authored tasks already depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatCadence {
    /// Repeat every `every` days.
    Daily,
    /// Repeat on the given weekdays; an empty set means pure interval
    /// counting in whole weeks from the start date.
    Weekly {
        /// Weekday indices, 0 = Sunday .. 6 = Saturday.
        on: BTreeSet<u32>,
    },
    /// Repeat on the given days of the month; an empty set means the same
    /// day-of-month as the start date.
    Monthly {
        /// Day-of-month values, 1..=31.
        on: BTreeSet<u32>,
    },
    /// A repeat-type string this version does not understand, retained
    /// verbatim so the record round-trips through storage.
    Unknown(String),
}

impl RepeatCadence {
    /// The wire name of this cadence.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Daily => "daily",
            Self::Weekly { .. } => "weekly",
            Self::Monthly { .. } => "monthly",
            Self::Unknown(s) => s,
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized rule
// ---------------------------------------------------------------------------

/// The normalized cadence description attached to a repeating task.
///
/// The engine only reads this; creation and editing belong to the task CRUD
/// layer, and the `completed`/`skipped` flags are reset externally at each
/// cadence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecurrence", into = "RawRecurrence")]
pub struct RecurrenceRule {
    /// The cadence's anchor date. `None` means the task started in the
    /// infinite past: every date satisfies `date >= start_date`.
    pub start_date: Option<NaiveDate>,
    /// What kind of cadence this is.
    pub cadence: RepeatCadence,
    /// Interval multiplier (e.g. every 2 weeks). Always >= 1.
    pub every: u32,
    /// Whether today's instance was completed. Owned by the CRUD layer.
    pub completed: bool,
    /// Whether today's instance was skipped. Owned by the CRUD layer.
    pub skipped: bool,
}

impl RecurrenceRule {
    /// Create a rule with the given cadence, no anchor, and interval 1.
    pub fn new(cadence: RepeatCadence) -> Self {
        Self {
            start_date: None,
            cadence,
            every: 1,
            completed: false,
            skipped: false,
        }
    }

    // Builder methods
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_every(mut self, every: u32) -> Self {
        self.every = every.max(1);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_skipped(mut self, skipped: bool) -> Self {
        self.skipped = skipped;
        self
    }

    /// Whether today's instance has been resolved. Either flag alone counts.
    pub fn is_resolved(&self) -> bool {
        self.completed || self.skipped
    }
}

impl From<RawRecurrence> for RecurrenceRule {
    fn from(raw: RawRecurrence) -> Self {
        raw.normalize()
    }
}

// ---------------------------------------------------------------------------
// Raw (storage-shaped) rule
// ---------------------------------------------------------------------------

/// A recurrence rule as the store delivers it, before normalization.
///
/// Legacy task records carry the repeat type as a bare string; newer records
/// carry the full structured shape. Both deserialize here and normalize into
/// a `RecurrenceRule` via [`RawRecurrence::normalize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecurrence {
    /// The structured shape written by current clients.
    Structured(RawRecurrenceRecord),
    /// A bare repeat-type string from legacy records.
    Legacy(String),
}

/// The structured recurrence shape, all fields optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecurrenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_every: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_on: Option<Vec<i64>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub skipped: bool,
}

impl RawRecurrence {
    /// Normalize into the engine-facing rule shape.
    ///
    /// Permissive by design: missing/invalid `repeat_every` defaults to 1,
    /// missing `repeat_on` to an empty set, an unrecognized `repeat_type`
    /// is retained in the `Unknown` arm. Out-of-range `repeat_on` values
    /// are dropped with a warning; the engine never re-validates.
    pub fn normalize(self) -> RecurrenceRule {
        let record = match self {
            Self::Structured(record) => record,
            Self::Legacy(repeat_type) => RawRecurrenceRecord {
                repeat_type: Some(repeat_type),
                ..RawRecurrenceRecord::default()
            },
        };

        let repeat_type = record.repeat_type.unwrap_or_default();
        let cadence = match repeat_type.to_lowercase().as_str() {
            "daily" => RepeatCadence::Daily,
            "weekly" => RepeatCadence::Weekly {
                on: in_range_set(record.repeat_on.as_deref(), 0, 6, "weekday"),
            },
            "monthly" => RepeatCadence::Monthly {
                on: in_range_set(record.repeat_on.as_deref(), 1, 31, "day-of-month"),
            },
            _ => RepeatCadence::Unknown(repeat_type),
        };

        let every = record
            .repeat_every
            .filter(|&n| n >= 1)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1);

        RecurrenceRule {
            start_date: record.start_date,
            cadence,
            every,
            completed: record.completed,
            skipped: record.skipped,
        }
    }

    /// Reject raw records the permissive normalization would silently patch
    /// up. A strictness extension for callers that want it; no engine path
    /// calls this.
    pub fn validate_strict(&self) -> DomainResult<()> {
        let Self::Structured(record) = self else {
            return Ok(());
        };

        if let Some(every) = record.repeat_every {
            if every < 1 {
                return Err(DomainError::ValidationFailed(format!(
                    "repeat_every must be >= 1, got {every}"
                )));
            }
        }

        let repeat_type = record.repeat_type.as_deref().unwrap_or("");
        let range = match repeat_type {
            "weekly" => Some((0, 6)),
            "monthly" => Some((1, 31)),
            "daily" => None,
            other => {
                return Err(DomainError::ValidationFailed(format!(
                    "unrecognized repeat_type '{other}'"
                )));
            }
        };

        if let (Some((min, max)), Some(on)) = (range, record.repeat_on.as_deref()) {
            if let Some(bad) = on.iter().find(|&&v| v < min || v > max) {
                return Err(DomainError::ValidationFailed(format!(
                    "repeat_on value {bad} outside [{min}, {max}] for {repeat_type} cadence"
                )));
            }
        }

        Ok(())
    }
}

impl From<RecurrenceRule> for RawRecurrence {
    fn from(rule: RecurrenceRule) -> Self {
        let repeat_on = match &rule.cadence {
            RepeatCadence::Weekly { on } | RepeatCadence::Monthly { on } if !on.is_empty() => {
                Some(on.iter().map(|&v| i64::from(v)).collect())
            }
            _ => None,
        };

        Self::Structured(RawRecurrenceRecord {
            start_date: rule.start_date,
            repeat_type: Some(rule.cadence.as_str().to_string()),
            repeat_every: Some(i64::from(rule.every)),
            repeat_on,
            completed: rule.completed,
            skipped: rule.skipped,
        })
    }
}

/// Collect raw `repeat_on` values into a set, dropping anything outside
/// `[min, max]`.
fn in_range_set(values: Option<&[i64]>, min: i64, max: i64, what: &str) -> BTreeSet<u32> {
    let mut set = BTreeSet::new();
    for &value in values.unwrap_or_default() {
        if (min..=max).contains(&value) {
            // Range-checked above, the cast cannot fail.
            if let Ok(v) = u32::try_from(value) {
                set.insert(v);
            }
        } else {
            warn!(value, what, "dropping out-of-range repeat_on value");
        }
    }
    set
}
