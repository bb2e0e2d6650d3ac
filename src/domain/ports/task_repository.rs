//! Repository port for recurring task persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::task::{RecurringTask, TaskKind};

/// Filter for listing recurring tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Restrict to a single task kind.
    pub kind: Option<TaskKind>,
    /// Only tasks whose today-instance is unresolved.
    pub unresolved_only: bool,
}

/// Persistence operations the task storage layer provides.
///
/// Completion/skip flags are persisted and reset here, never by the engine.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new recurring task.
    async fn create(&self, task: &RecurringTask) -> DomainResult<()>;

    /// Get a task by ID.
    async fn get(&self, id: Uuid) -> DomainResult<Option<RecurringTask>>;

    /// Update an existing task.
    async fn update(&self, task: &RecurringTask) -> DomainResult<()>;

    /// Delete a task by ID.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// List tasks matching the filter.
    async fn list(&self, filter: TaskFilter) -> DomainResult<Vec<RecurringTask>>;
}
