use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// Claims embedded in a session token.
///
/// Only `sub` is trusted after verification; the auth gate re-fetches the
/// user record so role and status changes take effect before natural expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// User id (subject claim)
    pub sub: String,
    pub name: String,
    pub username: String,
    /// Role at issuance time, lowercase ("admin" | "agent")
    pub role: String,
    /// Expiry (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Password change for the logged-in user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub password_current: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,
}

/// Response for login and password change: the fresh token plus the user
/// record with the password stripped. The same token also travels in the
/// `jwt` cookie.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub status: String,
    pub token: String,
    pub data: User,
}
