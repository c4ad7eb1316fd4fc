//! Caller identity passed explicitly into use cases.

use super::profile::{UserProfile, UserRole};
use crate::domain::shared::UserId;

/// The authenticated caller of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
    role: UserRole,
}

impl AuthContext {
    /// Create a context.
    #[must_use]
    pub const fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Context for a known user.
    #[must_use]
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self::new(profile.id.clone(), profile.role)
    }

    /// Caller's user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Caller's role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns true for admins.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Owners and admins may read and edit a user's trades.
    #[must_use]
    pub fn can_access(&self, owner: &UserId) -> bool {
        self.is_admin() || &self.user_id == owner
    }
}
