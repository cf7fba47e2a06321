//! pacer-core
//!
//! Core building blocks for the pacer task tracker: user-owned tasks with a
//! deadline and an append-only progress history, plus the two derived
//! metrics (elapsed deadline window, latest reported completion).
//!
//! Layout:
//! - **domain**: records, ids, percentage math, response views, errors
//! - **ports**: abstraction layer (Clock, IdGenerator, TaskStore, UserDirectory)
//! - **impls**: in-memory adapters for development and tests
//! - **app**: the TaskService operations and wiring

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{DeadlinePolicy, TaskService, TaskServiceBuilder};
pub use domain::{
    AddTask, ProgressEvent, TaskDetail, TaskDetailPhoto, TaskError, TaskId, TaskRecord,
    TaskSummary, TaskSummaryPhoto, UserId, UserRecord,
};
