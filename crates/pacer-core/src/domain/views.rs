//! Response views: serializable snapshots handed to the calling layer.
//!
//! These are plain data; the percentages are computed at read time by the
//! service, so a view is only accurate for the clock instant it was built at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{PhotoId, TaskId};

/// Creation request for `TaskService::add_one`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    pub name: String,

    /// Defaults to the service's deadline window (7 days) when omitted.
    pub deadline: Option<DateTime<Utc>>,
}

/// One progress measurement as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub value: u8,
    pub timestamp: DateTime<Utc>,
}

/// Full view of a single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDetail {
    pub id: TaskId,
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub elapsed_percentage: u8,
    pub completion_percentage: u8,

    /// Complete progress history, oldest first.
    pub events: Vec<ProgressPoint>,
}

/// `TaskDetail` plus the photo reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDetailPhoto {
    pub id: TaskId,
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub elapsed_percentage: u8,
    pub completion_percentage: u8,
    pub events: Vec<ProgressPoint>,

    /// `None` when no photo has been attached.
    pub photo_id: Option<PhotoId>,
}

/// One row of the owner's task listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: TaskId,
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub elapsed_percentage: u8,
    pub completion_percentage: u8,
}

/// `TaskSummary` plus the photo reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummaryPhoto {
    pub id: TaskId,
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub elapsed_percentage: u8,
    pub completion_percentage: u8,
    pub photo_id: Option<PhotoId>,
}
