//! Manage Users Use Case
//!
//! Admin-only registration and removal of journal users. Trades of a removed
//! user stay in the journal.

use std::sync::Arc;

use crate::application::dto::CreateUserDto;
use crate::application::errors::JournalError;
use crate::application::ports::UserDirectoryPort;
use crate::domain::access::{AuthContext, UserProfile};
use crate::domain::shared::UserId;

use super::require_admin;

/// Use case for adding and removing users.
pub struct ManageUsersUseCase<U>
where
    U: UserDirectoryPort,
{
    directory: Arc<U>,
}

impl<U> ManageUsersUseCase<U>
where
    U: UserDirectoryPort,
{
    /// Create a new ManageUsersUseCase.
    pub fn new(directory: Arc<U>) -> Self {
        Self { directory }
    }

    /// Register a user.
    ///
    /// # Errors
    ///
    /// - `AdminOnly` for non-admin callers.
    /// - `InvalidInput` for a blank username.
    /// - `USER_EXISTS` directory error when the ID or username is taken.
    pub async fn create(
        &self,
        ctx: &AuthContext,
        request: &CreateUserDto,
    ) -> Result<UserProfile, JournalError> {
        require_admin(ctx)?;

        let profile = request.to_profile()?;
        self.directory.create_user(profile.clone()).await?;

        tracing::info!(
            admin = %ctx.user_id(),
            user_id = %profile.id,
            role = %profile.role,
            "User created"
        );
        Ok(profile)
    }

    /// Remove a user.
    ///
    /// # Errors
    ///
    /// - `AdminOnly` for non-admin callers.
    /// - `InvalidInput` when an admin targets their own account.
    /// - `UserNotFound` if the user is not in the directory.
    pub async fn delete(&self, ctx: &AuthContext, user_id: &UserId) -> Result<(), JournalError> {
        require_admin(ctx)?;

        if ctx.user_id() == user_id {
            return Err(JournalError::InvalidInput {
                field: "id".to_string(),
                message: "Admins cannot delete their own account".to_string(),
            });
        }

        if !self.directory.delete_user(user_id).await? {
            return Err(JournalError::UserNotFound {
                user_id: user_id.to_string(),
            });
        }

        tracing::info!(admin = %ctx.user_id(), user_id = %user_id, "User deleted");
        Ok(())
    }
}
