//! Questlog - Recurrence Scheduling Engine
//!
//! Questlog is the scheduling core of a gamified productivity tracker that
//! manages one-off missions, recurring dailies, and streak-based habits.
//! The CRUD screens, REST plumbing, and reward bookkeeping live elsewhere;
//! this crate owns the one algorithmically dense piece: deciding whether a
//! repeating task is due on a given day and when it comes up next.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Pure domain models, normalization of the
//!   loosely-typed recurrence records the store delivers, and the repository
//!   port the excluded storage layer implements.
//! - **Service Layer** (`services`): The pure due/next-occurrence engine and
//!   a thin schedule facade that assembles due/not-due views.
//!
//! All engine operations are pure functions of a rule and a caller-supplied
//! `today`; nothing in this crate reads the real-time clock.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use questlog::{RecurrenceRule, RepeatCadence};
//! use questlog::services::{due_evaluator, next_occurrence};
//!
//! let rule = RecurrenceRule::new(RepeatCadence::Daily)
//!     .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//!
//! assert!(due_evaluator::is_due(&rule, today));
//! assert_eq!(next_occurrence::next_occurrence(&rule, today), today);
//! ```

pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    RawRecurrence, RecurrenceRule, RecurringTask, RepeatCadence, TaskKind,
};
pub use domain::ports::{TaskFilter, TaskRepository};
pub use services::{ScheduleBoard, ScheduleService, ScheduledView};
