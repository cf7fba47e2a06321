//! Task record: the owned unit of work and its progress history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{PhotoId, TaskId, UserId};

/// One timestamped progress measurement against a task.
///
/// Owned exclusively by its parent `TaskRecord`; events are never shared or
/// referenced on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Completion percentage reported by the caller, in `[0, 100]`.
    pub result_percentage: u8,

    /// Derived: true iff `result_percentage == 100`.
    pub completed: bool,

    /// Server time when the event was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ProgressEvent {
    pub fn new(result_percentage: u8, timestamp: DateTime<Utc>) -> Self {
        Self {
            result_percentage,
            completed: result_percentage == 100,
            timestamp,
        }
    }
}

/// A user-owned task with a deadline and an append-only progress history.
///
/// Design:
/// - This record is the single source of truth for ownership: the owner id
///   lives here and "the owner's tasks" is a store query, not a second list.
/// - `events` stays private; the history is only ever appended to, via
///   `record_progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub name: String,
    pub owner: UserId,

    /// Set at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,

    /// Weak reference to an externally stored photo, if one was attached.
    pub photo: Option<PhotoId>,

    events: Vec<ProgressEvent>,
}

impl TaskRecord {
    pub fn new(
        id: TaskId,
        name: String,
        owner: UserId,
        created_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner,
            created_at,
            deadline,
            photo: None,
            events: Vec::new(),
        }
    }

    /// Append a progress event. Prior events are never reordered or dropped.
    pub fn record_progress(&mut self, event: ProgressEvent) {
        self.events.push(event);
    }

    /// Progress history, in insertion order.
    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    /// The most recently appended event, if any.
    pub fn latest_progress(&self) -> Option<&ProgressEvent> {
        self.events.last()
    }

    /// Attach (or replace) the photo reference. The photo bytes live in an
    /// external store; only the id is carried here.
    pub fn attach_photo(&mut self, photo: PhotoId) {
        self.photo = Some(photo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ulid::Ulid;

    fn record() -> TaskRecord {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        TaskRecord::new(
            TaskId::from_ulid(Ulid::new()),
            "Write report".to_string(),
            UserId::from_ulid(Ulid::new()),
            created,
            created + chrono::Duration::days(7),
        )
    }

    #[test]
    fn new_record_has_no_events_and_no_photo() {
        let task = record();
        assert!(task.events().is_empty());
        assert!(task.latest_progress().is_none());
        assert!(task.photo.is_none());
    }

    #[test]
    fn record_progress_appends_in_order() {
        let mut task = record();
        let t0 = task.created_at;

        task.record_progress(ProgressEvent::new(25, t0));
        task.record_progress(ProgressEvent::new(50, t0 + chrono::Duration::hours(1)));
        task.record_progress(ProgressEvent::new(40, t0 + chrono::Duration::hours(2)));

        let values: Vec<u8> = task.events().iter().map(|e| e.result_percentage).collect();
        assert_eq!(values, vec![25, 50, 40]);
        assert_eq!(task.latest_progress().unwrap().result_percentage, 40);
    }

    #[test]
    fn completed_flag_tracks_the_100_mark() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert!(!ProgressEvent::new(99, t).completed);
        assert!(ProgressEvent::new(100, t).completed);
    }

    #[test]
    fn attach_photo_replaces_the_reference() {
        let mut task = record();
        let first = PhotoId::from_ulid(Ulid::new());
        let second = PhotoId::from_ulid(Ulid::new());

        task.attach_photo(first);
        assert_eq!(task.photo, Some(first));

        task.attach_photo(second);
        assert_eq!(task.photo, Some(second));
    }
}
