//! UserDirectory port - identity resolution.
//!
//! Authentication itself lives outside this crate; the directory only
//! resolves an id (or a username, for the credential layer) to a user row.

use async_trait::async_trait;

use crate::domain::ids::UserId;
use crate::domain::user::UserRecord;
use crate::ports::StoreError;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;
}
