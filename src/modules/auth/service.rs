use axum_extra::extract::cookie::Cookie;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserStatus};
use crate::modules::users::service::USER_COLUMNS;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, UpdatePasswordRequest};

/// Row struct for the two queries that need the stored hash. Never leaves
/// this module.
#[derive(sqlx::FromRow)]
struct UserWithPassword {
    #[sqlx(flatten)]
    user: User,
    password: String,
}

pub struct AuthService;

impl AuthService {
    /// Authenticate by username and password and mint a session token.
    ///
    /// Failure order: unknown username is 404, wrong password is 401, and
    /// an INACTIVE account is reported as 404, indistinguishable from a
    /// non-existent one.
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(String, User), AppError> {
        let record = sqlx::query_as::<_, UserWithPassword>(&format!(
            "SELECT {USER_COLUMNS}, password FROM users WHERE username = $1"
        ))
        .bind(dto.username.to_lowercase())
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("User does not exist"))?;

        if !verify_password(&dto.password, &record.password)? {
            return Err(AppError::unauthorized("Incorrect password."));
        }

        if record.user.status == UserStatus::Inactive {
            return Err(AppError::not_found("User does not exist."));
        }

        let token = create_session_token(&record.user, jwt_config)?;
        Ok((token, record.user))
    }

    /// Change the logged-in user's password and re-issue a session exactly
    /// like login does.
    pub async fn update_password(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdatePasswordRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(String, User), AppError> {
        let record = sqlx::query_as::<_, UserWithPassword>(&format!(
            "SELECT {USER_COLUMNS}, password FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("User does not exist"))?;

        if !verify_password(&dto.password_current, &record.password)? {
            return Err(AppError::unauthorized("Current password entered is wrong."));
        }

        let hashed = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET password = $2, updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&hashed)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        let token = create_session_token(&user, jwt_config)?;
        Ok((token, user))
    }

    /// Build the identity cookie carrying a freshly minted token.
    pub fn session_cookie(token: String, config: &JwtConfig) -> Cookie<'static> {
        let builder = Cookie::build(("jwt", token))
            .path("/")
            .http_only(true)
            .max_age(time::Duration::days(config.cookie_expires_in));

        // Secure only in production so local HTTP development keeps working.
        if config.secure_cookie {
            builder.secure(true).build()
        } else {
            builder.build()
        }
    }

    /// Overwrite the identity cookie with a sentinel that expires in 10
    /// seconds. Only the cookie transport is affected; a token presented via
    /// the Authorization header stays valid until its own expiry.
    pub fn logout_cookie() -> Cookie<'static> {
        Cookie::build(("jwt", "loggedout"))
            .path("/")
            .http_only(true)
            .max_age(time::Duration::seconds(10))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            expires_in: 3600,
            cookie_expires_in: 30,
            secure_cookie: false,
        }
    }

    #[test]
    fn session_cookie_is_http_only_with_configured_lifetime() {
        let cookie = AuthService::session_cookie("token-value".to_string(), &test_config());

        assert_eq!(cookie.name(), "jwt");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), None);
        assert_eq!(cookie.max_age(), Some(time::Duration::days(30)));
    }

    #[test]
    fn session_cookie_is_secure_in_production() {
        let config = JwtConfig {
            secure_cookie: true,
            ..test_config()
        };
        let cookie = AuthService::session_cookie("token-value".to_string(), &config);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn logout_cookie_expires_in_ten_seconds() {
        let cookie = AuthService::logout_cookie();

        assert_eq!(cookie.name(), "jwt");
        assert_eq!(cookie.value(), "loggedout");
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(10)));
    }
}
