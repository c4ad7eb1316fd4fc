//! User Directory Port (Driven Port)
//!
//! Interface for resolving journal users and their roles.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::UserSeed;
use crate::domain::access::{UserProfile, UserRole};
use crate::domain::shared::UserId;

/// User directory error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserDirectoryError {
    /// The directory backend could not be reached.
    #[error("User directory unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// A user with the same ID or username is already registered.
    #[error("User already exists: {user}")]
    AlreadyExists {
        /// Conflicting ID or username.
        user: String,
    },
}

/// Port for looking up and managing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectoryPort: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserDirectoryError>;

    /// All users, in directory order.
    async fn list_users(&self) -> Result<Vec<UserProfile>, UserDirectoryError>;

    /// Users with the given role, in directory order.
    async fn list_by_role(&self, role: UserRole) -> Result<Vec<UserProfile>, UserDirectoryError> {
        Ok(self
            .list_users()
            .await?
            .into_iter()
            .filter(|u| u.role == role)
            .collect())
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the ID or username is taken.
    async fn create_user(&self, profile: UserProfile) -> Result<(), UserDirectoryError>;

    /// Remove a user. Returns whether the user was present.
    async fn delete_user(&self, id: &UserId) -> Result<bool, UserDirectoryError>;
}

/// In-memory user directory, seeded from configuration.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<UserProfile>>,
}

impl InMemoryUserDirectory {
    /// Create a directory holding `users`.
    #[must_use]
    pub fn new(users: Vec<UserProfile>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a directory from configured seeds.
    #[must_use]
    pub fn from_seeds(seeds: &[UserSeed]) -> Self {
        Self::new(seeds.iter().map(UserSeed::to_profile).collect())
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Check if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserDirectoryPort for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserDirectoryError> {
        let users = self
            .users
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserProfile>, UserDirectoryError> {
        let users = self
            .users
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(users.clone())
    }

    async fn create_user(&self, profile: UserProfile) -> Result<(), UserDirectoryError> {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(existing) = users
            .iter()
            .find(|u| u.id == profile.id || u.username == profile.username)
        {
            let user = if existing.id == profile.id {
                profile.id.to_string()
            } else {
                profile.username.clone()
            };
            return Err(UserDirectoryError::AlreadyExists { user });
        }
        users.push(profile);
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<bool, UserDirectoryError> {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = users.len();
        users.retain(|u| &u.id != id);
        Ok(users.len() != before)
    }
}
