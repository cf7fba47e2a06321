//! IdGenerator port - id allocation abstraction.
//!
//! Ids are ULIDs: time-prefixed, so they sort by creation order, and
//! generated without coordination. The generator takes its timestamp from a
//! `Clock`, which keeps the time prefix deterministic under `FixedClock`.

use crate::domain::ids::{PhotoId, TaskId, UserId};
use crate::ports::Clock;
use ulid::Ulid;

pub trait IdGenerator: Send + Sync {
    fn generate_task_id(&self) -> TaskId;

    fn generate_user_id(&self) -> UserId;

    fn generate_photo_id(&self) -> PhotoId;
}

/// ULID-based id generator.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        TaskId::from(self.next_ulid())
    }

    fn generate_user_id(&self) -> UserId {
        UserId::from(self.next_ulid())
    }

    fn generate_photo_id(&self) -> PhotoId {
        PhotoId::from(self.next_ulid())
    }
}
