//! TaskStore port - the persistence seam for task records.
//!
//! The store is the source of truth. Every call is one atomic unit of work
//! against the backing store: a production adapter runs each method in its
//! own transaction, the in-memory adapter holds one lock across the call.
//! In particular `remove` is a single keyed deletion, so there is no
//! detach-then-delete ordering for callers to get right.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ids::{TaskId, UserId};
use crate::domain::task::TaskRecord;

/// Failure of the backing store itself (connectivity, I/O, corruption).
/// Domain conditions like "task not found" are `Option`s, not errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store operation failed: {0}")]
    OperationFailed(String),

    /// An update addressed a record that is no longer there.
    #[error("record vanished mid-operation")]
    MissingRecord,
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a freshly created record.
    async fn insert(&self, record: TaskRecord) -> Result<(), StoreError>;

    /// Look up one task by id.
    async fn get(&self, id: TaskId) -> Result<Option<TaskRecord>, StoreError>;

    /// Overwrite an existing record (progress appends, photo attachment).
    async fn update(&self, record: TaskRecord) -> Result<(), StoreError>;

    /// Delete one task by id. Returns whether a record was there.
    async fn remove(&self, id: TaskId) -> Result<bool, StoreError>;

    /// All tasks owned by `owner`, in insertion order.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<TaskRecord>, StoreError>;
}
