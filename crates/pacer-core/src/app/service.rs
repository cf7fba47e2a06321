//! TaskService - validation, ownership enforcement, percentage computation
//! and response assembly.
//!
//! Every operation takes the acting user's identity explicitly; there is no
//! ambient "current user". Ownership is checked uniformly by comparing the
//! task record's owner field against the actor, for reads and mutations
//! alike.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::domain::errors::TaskError;
use crate::domain::ids::{TaskId, UserId};
use crate::domain::percent::{completion_percentage, elapsed_percentage};
use crate::domain::task::{ProgressEvent, TaskRecord};
use crate::domain::views::{
    AddTask, ProgressPoint, TaskDetail, TaskDetailPhoto, TaskSummary, TaskSummaryPhoto,
};
use crate::ports::{Clock, IdGenerator, StoreError, SystemClock, TaskStore, UlidGenerator, UserDirectory};

/// Deadline defaults for task creation.
#[derive(Debug, Clone)]
pub struct DeadlinePolicy {
    /// Window granted when the caller supplies no deadline.
    pub default_window: Duration,
}

impl DeadlinePolicy {
    pub fn new(default_window: Duration) -> Self {
        Self { default_window }
    }
}

impl Default for DeadlinePolicy {
    fn default() -> Self {
        Self {
            default_window: Duration::days(7),
        }
    }
}

/// Error raised by `TaskServiceBuilder::build` when wiring is incomplete.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no task store configured")]
    MissingStore,

    #[error("no user directory configured")]
    MissingUserDirectory,
}

/// Builder for `TaskService`.
///
/// Store and directory are required (fail-fast at build time); clock and id
/// generator default to the system implementations.
#[derive(Default)]
pub struct TaskServiceBuilder {
    store: Option<Arc<dyn TaskStore>>,
    users: Option<Arc<dyn UserDirectory>>,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
    policy: Option<DeadlinePolicy>,
}

impl TaskServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn users(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn policy(mut self, policy: DeadlinePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<TaskService, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let users = self.users.ok_or(BuildError::MissingUserDirectory)?;
        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let ids: Arc<dyn IdGenerator> = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(Arc::clone(&clock))));
        Ok(TaskService {
            store,
            users,
            clock,
            ids,
            policy: self.policy.unwrap_or_default(),
        })
    }
}

/// The core task tracker service.
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    users: Arc<dyn UserDirectory>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    policy: DeadlinePolicy,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl TaskService {
    pub fn builder() -> TaskServiceBuilder {
        TaskServiceBuilder::new()
    }

    /// Create a task for `actor`.
    ///
    /// Validation, in order: trimmed name must be non-empty and at least two
    /// characters; the actor must resolve; the name must not collide
    /// (case-insensitively) with another task of the same owner; a supplied
    /// deadline must lie after the creation instant.
    pub async fn add_one(&self, req: AddTask, actor: UserId) -> Result<TaskId, TaskError> {
        let trimmed = req.name.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyName);
        }
        if trimmed.chars().count() < 2 {
            return Err(TaskError::NameTooShort);
        }

        if self.users.find(actor).await?.is_none() {
            return Err(TaskError::UserNotFound(actor));
        }

        let owned = self.store.list_by_owner(actor).await?;
        let wanted = req.name.to_lowercase();
        if owned.iter().any(|t| t.name.to_lowercase() == wanted) {
            return Err(TaskError::NameExists);
        }

        let now = self.clock.now();
        let deadline = match req.deadline {
            Some(deadline) if deadline <= now => {
                return Err(TaskError::DeadlineBeforeCreation);
            }
            Some(deadline) => deadline,
            None => now + self.policy.default_window,
        };

        let id = self.ids.generate_task_id();
        let record = TaskRecord::new(id, req.name, actor, now, deadline);
        self.store.insert(record).await?;

        info!(task = %id, user = %actor, %deadline, "task created");
        Ok(id)
    }

    /// Append a progress event to one of `actor`'s tasks.
    pub async fn update_progress(
        &self,
        task: TaskId,
        value: i32,
        actor: UserId,
    ) -> Result<(), TaskError> {
        let mut record = self.owned_task(task, actor).await?;

        if !(0..=100).contains(&value) {
            return Err(TaskError::ProgressOutOfRange(value));
        }

        record.record_progress(ProgressEvent::new(value as u8, self.clock.now()));
        self.store.update(record).await?;

        debug!(task = %task, value, "progress recorded");
        Ok(())
    }

    /// Delete one of `actor`'s tasks. One keyed store deletion; nothing else
    /// has to be kept in sync.
    pub async fn remove(&self, task: TaskId, actor: UserId) -> Result<(), TaskError> {
        self.owned_task(task, actor).await?;

        if !self.store.remove(task).await? {
            return Err(TaskError::Store(StoreError::MissingRecord));
        }

        info!(task = %task, user = %actor, "task removed");
        Ok(())
    }

    /// Full view of one of `actor`'s tasks.
    pub async fn detail(&self, task: TaskId, actor: UserId) -> Result<TaskDetail, TaskError> {
        let record = self.owned_task(task, actor).await?;
        let now = self.clock.now();
        Ok(TaskDetail {
            id: record.id,
            name: record.name.clone(),
            deadline: record.deadline,
            elapsed_percentage: elapsed_percentage(record.created_at, now, record.deadline),
            completion_percentage: completion_percentage(record.events()),
            events: progress_points(&record),
        })
    }

    /// `detail`, plus the photo reference.
    pub async fn detail_with_photo(
        &self,
        task: TaskId,
        actor: UserId,
    ) -> Result<TaskDetailPhoto, TaskError> {
        let record = self.owned_task(task, actor).await?;
        let now = self.clock.now();
        Ok(TaskDetailPhoto {
            id: record.id,
            name: record.name.clone(),
            deadline: record.deadline,
            elapsed_percentage: elapsed_percentage(record.created_at, now, record.deadline),
            completion_percentage: completion_percentage(record.events()),
            events: progress_points(&record),
            photo_id: record.photo,
        })
    }

    /// One summary per task owned by `user`, in insertion order.
    pub async fn home(&self, user: UserId) -> Result<Vec<TaskSummary>, TaskError> {
        let records = self.owned_listing(user).await?;
        let now = self.clock.now();
        Ok(records
            .into_iter()
            .map(|record| TaskSummary {
                id: record.id,
                name: record.name.clone(),
                deadline: record.deadline,
                elapsed_percentage: elapsed_percentage(record.created_at, now, record.deadline),
                completion_percentage: completion_percentage(record.events()),
            })
            .collect())
    }

    /// `home`, plus the photo reference per task.
    pub async fn home_with_photo(&self, user: UserId) -> Result<Vec<TaskSummaryPhoto>, TaskError> {
        let records = self.owned_listing(user).await?;
        let now = self.clock.now();
        Ok(records
            .into_iter()
            .map(|record| TaskSummaryPhoto {
                id: record.id,
                name: record.name.clone(),
                deadline: record.deadline,
                elapsed_percentage: elapsed_percentage(record.created_at, now, record.deadline),
                completion_percentage: completion_percentage(record.events()),
                photo_id: record.photo,
            })
            .collect())
    }

    /// Fetch a task and verify the actor owns it.
    async fn owned_task(&self, task: TaskId, actor: UserId) -> Result<TaskRecord, TaskError> {
        let record = self
            .store
            .get(task)
            .await?
            .ok_or(TaskError::TaskNotFound(task))?;
        if record.owner != actor {
            warn!(task = %task, user = %actor, "ownership check refused access");
            return Err(TaskError::NotOwner(task));
        }
        Ok(record)
    }

    /// Resolve `user` and fetch their tasks in insertion order.
    async fn owned_listing(&self, user: UserId) -> Result<Vec<TaskRecord>, TaskError> {
        if self.users.find(user).await?.is_none() {
            return Err(TaskError::UserNotFound(user));
        }
        Ok(self.store.list_by_owner(user).await?)
    }
}

fn progress_points(record: &TaskRecord) -> Vec<ProgressPoint> {
    record
        .events()
        .iter()
        .map(|e| ProgressPoint {
            value: e.result_percentage,
            timestamp: e.timestamp,
        })
        .collect()
}
