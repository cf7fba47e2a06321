//! In-memory task store for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ids::{TaskId, UserId};
use crate::domain::task::TaskRecord;
use crate::ports::{StoreError, TaskStore};

/// In-memory store state.
///
/// `records` is the single source of truth; `by_owner` is an insertion-order
/// index over it. Both live behind one mutex, so every port call is one
/// atomic unit of work, matching what a transactional adapter provides.
#[derive(Default)]
struct InMemoryStoreState {
    records: HashMap<TaskId, TaskRecord>,
    by_owner: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryStoreState {
    fn insert(&mut self, record: TaskRecord) {
        self.by_owner.entry(record.owner).or_default().push(record.id);
        self.records.insert(record.id, record);
    }

    fn remove(&mut self, id: TaskId) -> bool {
        let Some(record) = self.records.remove(&id) else {
            return false;
        };
        if let Some(owned) = self.by_owner.get_mut(&record.owner) {
            owned.retain(|t| *t != id);
        }
        true
    }

    fn list_by_owner(&self, owner: UserId) -> Vec<TaskRecord> {
        let Some(owned) = self.by_owner.get(&owner) else {
            return Vec::new();
        };
        owned
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }
}

/// In-memory `TaskStore` implementation.
pub struct InMemoryTaskStore {
    state: Arc<Mutex<InMemoryStoreState>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryStoreState::default())),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, record: TaskRecord) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.insert(record);
        Ok(())
    }

    async fn get(&self, id: TaskId) -> Result<Option<TaskRecord>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn update(&self, record: TaskRecord) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if !state.records.contains_key(&record.id) {
            return Err(StoreError::MissingRecord);
        }
        state.records.insert(record.id, record);
        Ok(())
    }

    async fn remove(&self, id: TaskId) -> Result<bool, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state.remove(id))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<TaskRecord>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.list_by_owner(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ulid::Ulid;

    fn record(owner: UserId, name: &str) -> TaskRecord {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        TaskRecord::new(
            TaskId::from_ulid(Ulid::new()),
            name.to_string(),
            owner,
            created,
            created + Duration::days(7),
        )
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = InMemoryTaskStore::new();
        let owner = UserId::from_ulid(Ulid::new());
        let task = record(owner, "one");
        let id = task.id;

        store.insert(task).await.unwrap();

        let found = store.get(id).await.unwrap().unwrap();
        assert_eq!(found.name, "one");
        assert_eq!(found.owner, owner);
    }

    #[tokio::test]
    async fn list_by_owner_keeps_insertion_order_and_scopes_by_owner() {
        let store = InMemoryTaskStore::new();
        let alice = UserId::from_ulid(Ulid::new());
        let bob = UserId::from_ulid(Ulid::new());

        store.insert(record(alice, "first")).await.unwrap();
        store.insert(record(bob, "intruder")).await.unwrap();
        store.insert(record(alice, "second")).await.unwrap();
        store.insert(record(alice, "third")).await.unwrap();

        let names: Vec<String> = store
            .list_by_owner(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn remove_deletes_the_record_and_the_index_entry() {
        let store = InMemoryTaskStore::new();
        let owner = UserId::from_ulid(Ulid::new());
        let task = record(owner, "doomed");
        let id = task.id;
        store.insert(task).await.unwrap();

        assert!(store.remove(id).await.unwrap());
        assert!(store.get(id).await.unwrap().is_none());
        assert!(store.list_by_owner(owner).await.unwrap().is_empty());

        // Second removal finds nothing.
        assert!(!store.remove(id).await.unwrap());
    }

    #[tokio::test]
    async fn update_of_a_missing_record_is_a_store_error() {
        let store = InMemoryTaskStore::new();
        let ghost = record(UserId::from_ulid(Ulid::new()), "ghost");

        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingRecord));
    }
}
