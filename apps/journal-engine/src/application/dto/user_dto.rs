//! User management DTOs.

use serde::{Deserialize, Serialize};

use crate::application::errors::JournalError;
use crate::domain::access::{UserProfile, UserRole};
use crate::domain::shared::UserId;

/// Request to register a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserDto {
    /// Explicit ID; generated when absent or blank.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, unique in the directory.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Role, student unless given.
    #[serde(default)]
    pub role: UserRole,
}

impl CreateUserDto {
    /// Convert to a profile.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the username is blank.
    pub fn to_profile(&self) -> Result<UserProfile, JournalError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(JournalError::InvalidInput {
                field: "username".to_string(),
                message: "Username cannot be empty".to_string(),
            });
        }

        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => UserId::new(id),
            _ => UserId::generate(),
        };

        Ok(UserProfile {
            id,
            username: username.to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_student_with_generated_id() {
        let dto: CreateUserDto = serde_json::from_str(r#"{"username":" nina "}"#).unwrap();
        let profile = dto.to_profile().unwrap();
        assert_eq!(profile.username, "nina");
        assert_eq!(profile.role, UserRole::Student);
        assert!(!profile.id.as_str().is_empty());
    }

    #[test]
    fn keeps_explicit_id() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"id":"coach","username":"coach","role":"admin"}"#).unwrap();
        let profile = dto.to_profile().unwrap();
        assert_eq!(profile.id.as_str(), "coach");
        assert_eq!(profile.role, UserRole::Admin);
    }

    #[test]
    fn blank_username_rejected() {
        let dto: CreateUserDto = serde_json::from_str(r#"{"username":"  "}"#).unwrap();
        assert_eq!(dto.to_profile().unwrap_err().code(), "INVALID_FIELD");
    }
}
