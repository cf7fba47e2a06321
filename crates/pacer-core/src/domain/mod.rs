//! Domain model (ids, records, percentage math, views, errors).

pub mod errors;
pub mod ids;
pub mod percent;
pub mod task;
pub mod user;
pub mod views;

pub use self::errors::TaskError;
pub use self::ids::{PhotoId, TaskId, UserId};
pub use self::percent::{completion_percentage, elapsed_percentage};
pub use self::task::{ProgressEvent, TaskRecord};
pub use self::user::UserRecord;
pub use self::views::{
    AddTask, ProgressPoint, TaskDetail, TaskDetailPhoto, TaskSummary, TaskSummaryPhoto,
};
