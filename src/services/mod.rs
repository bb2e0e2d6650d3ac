pub mod date_label;
pub mod due_evaluator;
pub mod next_occurrence;
pub mod schedule_service;

pub use schedule_service::{ScheduleBoard, ScheduleService, ScheduledView};
