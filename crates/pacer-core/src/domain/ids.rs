//! Domain identifiers (strongly-typed IDs).
//!
//! All identifiers are ULIDs behind a phantom-typed wrapper: `TaskId`,
//! `UserId` and `PhotoId` share one implementation but cannot be mixed up
//! at compile time. ULIDs are time-prefixed, so ids sort by creation order
//! and can be generated without coordination.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for each id type.
///
/// Provides the prefix used by `Display` ("task-", "user-", "photo-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic id type.
///
/// `T` is a zero-sized marker; it costs nothing at runtime but keeps a
/// `TaskId` from being passed where a `UserId` is expected.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Marker type for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Marker type for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum User {}

impl IdMarker for User {
    fn prefix() -> &'static str {
        "user-"
    }
}

/// Marker type for photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Photo {}

impl IdMarker for Photo {
    fn prefix() -> &'static str {
        "photo-"
    }
}

/// Identifier of a Task (a user-owned unit of work).
pub type TaskId = Id<Task>;

/// Identifier of a User (task owner).
pub type UserId = Id<User>;

/// Identifier of an externally stored photo resource.
pub type PhotoId = Id<Photo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let ulid1 = Ulid::new();
        let ulid2 = Ulid::new();
        let ulid3 = Ulid::new();

        let task = TaskId::from_ulid(ulid1);
        let user = UserId::from_ulid(ulid2);
        let photo = PhotoId::from_ulid(ulid3);

        assert_eq!(task.as_ulid(), ulid1);
        assert_eq!(user.as_ulid(), ulid2);
        assert_eq!(photo.as_ulid(), ulid3);

        assert!(task.to_string().starts_with("task-"));
        assert!(user.to_string().starts_with("user-"));
        assert!(photo.to_string().starts_with("photo-"));

        // The whole point: you can't accidentally mix these types.
        // (This is a compile-time property, so we just keep it as a comment.)
        // let _: TaskId = user; // <- does not compile
    }

    #[test]
    fn ulid_ids_sort_by_generation_order() {
        let id1 = TaskId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = TaskId::from_ulid(Ulid::new());

        assert!(id1 < id2);
    }

    #[test]
    fn ids_survive_a_serde_round_trip() {
        let task_id = TaskId::from_ulid(Ulid::new());

        let serialized = serde_json::to_string(&task_id).unwrap();
        let deserialized: TaskId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(task_id, deserialized);
    }
}
