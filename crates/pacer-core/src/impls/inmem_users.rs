//! In-memory user directory for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ids::UserId;
use crate::domain::user::UserRecord;
use crate::ports::{StoreError, UserDirectory};

/// In-memory `UserDirectory` implementation.
///
/// Seeding users is an inherent method, not part of the port: registration
/// belongs to the (external) account layer, the service only resolves.
pub struct InMemoryUserDirectory {
    users: Arc<Mutex<HashMap<UserId, UserRecord>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn add_user(&self, user: UserRecord) {
        let mut users = self.users.lock().await;
        users.insert(user.id, user);
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.lock().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.lock().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    #[tokio::test]
    async fn resolves_by_id_and_username() {
        let directory = InMemoryUserDirectory::new();
        let id = UserId::from_ulid(Ulid::new());
        directory.add_user(UserRecord::new(id, "alice")).await;

        let by_id = directory.find(id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = directory.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, id);

        assert!(directory.find_by_username("bob").await.unwrap().is_none());
        assert!(
            directory
                .find(UserId::from_ulid(Ulid::new()))
                .await
                .unwrap()
                .is_none()
        );
    }
}
