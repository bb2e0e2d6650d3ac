//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interface the excluded storage layer
//! implements:
//! - TaskRepository: persistence operations for recurring tasks
//!
//! The engine itself is pure and synchronous; only this seam is async.

pub mod task_repository;

pub use task_repository::{TaskFilter, TaskRepository};
