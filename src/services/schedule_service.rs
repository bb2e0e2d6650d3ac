//! Service assembling due/not-due schedule views.
//!
//! Coordinates between the TaskRepository (persistence, excluded from this
//! crate) and the pure due/next-occurrence engine. Every evaluation pass
//! takes a single caller-supplied `today` so no computation can straddle
//! midnight.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::task::{RecurringTask, TaskKind};
use crate::domain::ports::task_repository::{TaskFilter, TaskRepository};
use crate::services::{date_label, due_evaluator, next_occurrence};

/// One task's scheduling answers for a given day.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledView {
    pub task_id: Uuid,
    pub title: String,
    pub kind: TaskKind,
    /// The task's next occurrence on or after the evaluation day.
    pub next_occurrence: NaiveDate,
    /// Short label for the next occurrence ("Today", "Tomorrow", ...).
    pub label: String,
}

/// The Due and Not-Due lists for a given day.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleBoard {
    /// The day the board was evaluated for.
    pub today: NaiveDate,
    pub due: Vec<ScheduledView>,
    pub not_due: Vec<ScheduledView>,
}

/// Facade over the pure engine for callers holding a task repository.
pub struct ScheduleService<R: TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository> ScheduleService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Evaluate every stored task against `today` and partition into the
    /// Due and Not-Due lists.
    pub async fn board(&self, today: NaiveDate) -> DomainResult<ScheduleBoard> {
        let tasks = self.repo.list(TaskFilter::default()).await?;

        let mut due = Vec::new();
        let mut not_due = Vec::new();
        for task in &tasks {
            let view = Self::view(task, today);
            // The two predicates answer different questions; a task lands in
            // the Not-Due list only when is_not_due says so, not merely
            // because is_due declined it.
            if due_evaluator::is_due(&task.rule, today) {
                due.push(view);
            } else if due_evaluator::is_not_due(&task.rule, today) {
                not_due.push(view);
            }
        }

        debug!(
            total = tasks.len(),
            due = due.len(),
            not_due = not_due.len(),
            %today,
            "schedule board assembled"
        );
        Ok(ScheduleBoard { today, due, not_due })
    }

    /// Scheduling answers for a single task.
    pub async fn next_for(&self, id: Uuid, today: NaiveDate) -> DomainResult<ScheduledView> {
        let task = self
            .repo
            .get(id)
            .await?
            .ok_or(DomainError::TaskNotFound(id))?;
        Ok(Self::view(&task, today))
    }

    fn view(task: &RecurringTask, today: NaiveDate) -> ScheduledView {
        let next = next_occurrence::next_occurrence(&task.rule, today);
        ScheduledView {
            task_id: task.id,
            title: task.title.clone(),
            kind: task.kind,
            next_occurrence: next,
            label: date_label::label(next, today),
        }
    }
}
