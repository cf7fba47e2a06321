use thiserror::Error;

use crate::domain::ids::{TaskId, UserId};
use crate::ports::StoreError;

/// Service-level error taxonomy.
///
/// Validation and authorization failures leave no partial state behind;
/// store failures propagate transparently and are never retried here.
#[derive(Debug, Error)]
pub enum TaskError {
    // Validation
    #[error("task name is empty")]
    EmptyName,

    #[error("task name must be at least 2 characters")]
    NameTooShort,

    #[error("a task with this name already exists for this user")]
    NameExists,

    #[error("deadline must be after the creation date")]
    DeadlineBeforeCreation,

    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(i32),

    // Not found
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    // Authorization
    #[error("task {0} does not belong to the acting user")]
    NotOwner(TaskId),

    // Backing store
    #[error(transparent)]
    Store(#[from] StoreError),
}
