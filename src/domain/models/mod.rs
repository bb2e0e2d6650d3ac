pub mod recurrence;
pub mod task;

pub use recurrence::{RawRecurrence, RecurrenceRule, RepeatCadence};
pub use task::{RecurringTask, TaskKind};
