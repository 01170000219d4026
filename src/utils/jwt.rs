use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::SessionClaims;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// Mint a session token for the given user.
///
/// Claims carry the user id, name, username and role plus issued-at and
/// expiry timestamps. Tokens are never revoked server-side; logout only
/// clears the cookie transport, so a captured token stays valid until `exp`.
pub fn create_session_token(user: &User, config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + config.expires_in;

    let claims = SessionClaims {
        sub: user.id.to_string(),
        name: user.name.clone(),
        username: user.username.clone(),
        role: user.role.as_str().to_string(),
        iat: now as usize,
        exp: exp as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
}

/// Verify a session token and return its claims.
///
/// Fails when the signature does not match, the token is malformed, or the
/// expiry has passed. Validity is purely structural and temporal; no
/// revocation list is consulted.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
