//! Application layer: the task service and its wiring.

pub mod service;

pub use self::service::{BuildError, DeadlinePolicy, TaskService, TaskServiceBuilder};
