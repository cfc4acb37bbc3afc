//! # User Repository

use bazaar_core::User;

use super::Repository;
use crate::error::{StoreError, StoreResult};

/// Repository of [`User`] records.
pub type UserRepository = Repository<User>;

impl Repository<User> {
    /// The first user whose username equals `username`.
    ///
    /// Usernames are not enforced unique, so earlier records win.
    pub fn by_username(&self, username: &str) -> StoreResult<User> {
        self.find(|user| user.username == username)
            .ok_or_else(|| StoreError::UsernameNotFound(username.to_string()))
    }
}
