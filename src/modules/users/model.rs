//! User entity and DTOs.
//!
//! The password hash lives in the `users` table but never on [`User`]:
//! queries that need it (login, password change) use a dedicated row struct
//! inside the auth service, so a user record can never be serialized with
//! its hash by accident.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// System roles. `agent` is the default for new accounts.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Agent,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Agent => "agent",
        }
    }
}

/// Account status. An INACTIVE user is treated as non-existent for
/// authentication purposes.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema,
)]
#[sqlx(type_name = "user_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// A user record as returned by the API (password hash excluded).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new user (admin only).
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "Please provide a name for the user"))]
    pub name: String,
    #[validate(length(min = 8, message = "Username must be at least 8 characters long."))]
    pub username: String,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,
    pub role: Option<UserRole>,
}

/// DTO for partial updates to a user (admin only).
///
/// `password`/`password_confirm` are accepted by the deserializer only so the
/// controller can reject them with a pointer to the password route.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Please provide a name for the user"))]
    pub name: Option<String>,
    #[validate(length(min = 8, message = "Username must be at least 8 characters long."))]
    pub username: Option<String>,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl UpdateUserDto {
    pub fn touches_password(&self) -> bool {
        self.password.is_some() || self.password_confirm.is_some()
    }
}

/// DTO for a user updating their own account.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountDto {
    #[validate(length(min = 1, message = "Please provide a name for the user"))]
    pub name: Option<String>,
    #[validate(length(min = 8, message = "Username must be at least 8 characters long."))]
    pub username: Option<String>,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl UpdateAccountDto {
    pub fn touches_password(&self) -> bool {
        self.password.is_some() || self.password_confirm.is_some()
    }
}

/// Envelope for a single user.
#[derive(Serialize, Debug, ToSchema)]
pub struct UserResponse {
    pub status: String,
    pub message: String,
    pub data: User,
}

/// Envelope for the user list.
#[derive(Serialize, Debug, ToSchema)]
pub struct UserListResponse {
    pub status: String,
    pub message: String,
    pub results: usize,
    pub data: Vec<User>,
}

/// Envelope for operations that only report an outcome.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&UserRole::Agent).unwrap(), "\"agent\"");
        assert_eq!(UserRole::default(), UserRole::Agent);
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Inactive).unwrap(),
            "\"INACTIVE\""
        );
        assert_eq!(UserStatus::default(), UserStatus::Active);
    }

    #[test]
    fn update_dto_flags_password_fields() {
        let dto = UpdateUserDto {
            password: Some("newpassword".into()),
            ..Default::default()
        };
        assert!(dto.touches_password());
        assert!(!UpdateUserDto::default().touches_password());
    }
}
