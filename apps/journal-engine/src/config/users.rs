//! Seed entries for the user directory.

use serde::{Deserialize, Serialize};

use crate::domain::access::{UserProfile, UserRole};
use crate::domain::shared::UserId;

/// A configured journal user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    /// User ID, matched against the `x-user-id` header.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Role.
    #[serde(default)]
    pub role: UserRole,
}

impl UserSeed {
    /// Convert into a domain profile.
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: UserId::new(&self.id),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}
