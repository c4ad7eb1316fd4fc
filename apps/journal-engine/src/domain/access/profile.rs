//! Journal users and roles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::UserId;

/// Role of a journal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Reviews every student's journal.
    Admin,
    /// Keeps a personal journal.
    #[default]
    Student,
}

impl UserRole {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known journal user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Role.
    #[serde(default)]
    pub role: UserRole,
}
