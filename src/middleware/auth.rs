use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::modules::users::model::{User, UserStatus};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Authentication gate. Extracting `AuthUser` in a handler (or through the
/// role middleware) is the "protect" stage: it finds a token, verifies it,
/// and re-resolves the claimed user id against the store.
///
/// Only the id claim is trusted. The user record is re-fetched so role and
/// status changes since token issuance take effect immediately; a deleted or
/// INACTIVE user is rejected even with a structurally valid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Token lookup order: `Authorization: Bearer <token>` header first, then
/// the `jwt` cookie.
fn extract_token(parts: &Parts) -> Option<String> {
    let bearer = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);

    bearer.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get("jwt")
            .map(|cookie| cookie.value().to_owned())
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)
            .ok_or_else(|| AppError::unauthorized("You need to login to access this route."))?;

        let claims = verify_token(&token, &state.jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

        let user = UserService::find_by_id(&state.db, user_id)
            .await?
            .filter(|user| user.status != UserStatus::Inactive)
            .ok_or_else(|| {
                AppError::unauthorized("The user belonging to this token does not exist.")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn prefers_bearer_header_over_cookie() {
        let parts = parts_with_headers(&[
            ("authorization", "Bearer header-token"),
            ("cookie", "jwt=cookie-token"),
        ]);
        assert_eq!(extract_token(&parts).as_deref(), Some("header-token"));
    }

    #[test]
    fn falls_back_to_jwt_cookie() {
        let parts = parts_with_headers(&[("cookie", "session=abc; jwt=cookie-token")]);
        assert_eq!(extract_token(&parts).as_deref(), Some("cookie-token"));
    }

    #[test]
    fn rejects_non_bearer_authorization_schemes() {
        let parts = parts_with_headers(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert_eq!(extract_token(&parts), None);
    }

    #[test]
    fn no_token_sources_yields_none() {
        let parts = parts_with_headers(&[]);
        assert_eq!(extract_token(&parts), None);
    }
}
