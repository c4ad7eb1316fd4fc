//! Caller identity.
//!
//! The caller names itself in the `x-user-id` header. The ID must exist in
//! the user directory; its role there decides what the caller may see.

use axum::http::HeaderMap;

use super::error::ApiError;
use crate::application::ports::UserDirectoryPort;
use crate::application::JournalError;
use crate::domain::access::AuthContext;
use crate::domain::shared::UserId;

/// Header carrying the caller's user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the caller from request headers.
pub(super) async fn authenticate<U>(
    directory: &U,
    headers: &HeaderMap,
) -> Result<AuthContext, ApiError>
where
    U: UserDirectoryPort,
{
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::unauthorized(format!("Missing {USER_ID_HEADER} header")))?;

    let user_id = UserId::new(raw);
    let profile = directory
        .find_by_id(&user_id)
        .await
        .map_err(|e| ApiError::from(JournalError::from(e)))?
        .ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Unknown caller");
            ApiError::unauthorized(format!("Unknown user: {user_id}"))
        })?;

    Ok(AuthContext::for_profile(&profile))
}
