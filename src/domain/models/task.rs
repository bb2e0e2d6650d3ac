//! Recurring task domain model.
//!
//! The engine-facing slice of the tracker's task record: identity, kind,
//! and the recurrence rule. Rewards, checklists, and ordering metadata live
//! in the task CRUD layer and never reach the engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurrence::RecurrenceRule;
use crate::services::{date_label, due_evaluator, next_occurrence};

/// What flavor of task this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// A one-off mission; typically has no recurrence beyond its start date.
    Mission,
    /// A recurring daily task, reset at each cadence boundary.
    Daily,
    /// A streak-based habit.
    Habit,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Daily => "daily",
            Self::Habit => "habit",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mission" => Some(Self::Mission),
            "daily" => Some(Self::Daily),
            "habit" => Some(Self::Habit),
            _ => None,
        }
    }
}

/// A task with a recurrence rule attached.
///
/// The CRUD layer owns persistence and edits; the engine reads the rule and
/// answers due/next-occurrence queries against a caller-supplied `today`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTask {
    pub id: Uuid,
    /// Human-readable title shown in the Due/Not-Due lists.
    pub title: String,
    /// Mission, daily, or habit.
    pub kind: TaskKind,
    /// The cadence description the engine evaluates.
    pub rule: RecurrenceRule,

    // -- Timestamps --
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecurringTask {
    /// Create a new recurring task.
    pub fn new(title: impl Into<String>, kind: TaskKind, rule: RecurrenceRule) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            rule,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this task belongs in the Due list for `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        due_evaluator::is_due(&self.rule, today)
    }

    /// Whether this task belongs in the Not-Due list for `today`.
    pub fn is_not_due(&self, today: NaiveDate) -> bool {
        due_evaluator::is_not_due(&self.rule, today)
    }

    /// The calendar date of this task's next occurrence.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        next_occurrence::next_occurrence(&self.rule, today)
    }

    /// Short human label for this task's next occurrence.
    pub fn next_occurrence_label(&self, today: NaiveDate) -> String {
        date_label::label(self.next_occurrence(today), today)
    }
}
