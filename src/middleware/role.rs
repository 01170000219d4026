//! Role-based authorization (the "restrictTo" stage).
//!
//! Must run after authentication has resolved an identity: the layer
//! middleware below performs the `AuthUser` extraction itself, so a missing
//! or invalid token is a 401 from the auth gate, while a valid identity with
//! the wrong role is a 403 from here.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Pure role predicate: no I/O, no side effects.
pub fn role_allowed(role: UserRole, allowed: &[UserRole]) -> bool {
    allowed.contains(&role)
}

/// Check the resolved identity against an allowed-role set inside a handler.
pub fn check_any_role(auth_user: &AuthUser, allowed: &[UserRole]) -> Result<(), AppError> {
    if !role_allowed(auth_user.0.role, allowed) {
        return Err(AppError::forbidden(
            "You do not have permission to perform this action",
        ));
    }

    Ok(())
}

/// Middleware that authenticates the request and gates on the given roles.
///
/// Usage with `axum::middleware::from_fn_with_state`:
///
/// ```rust,ignore
/// let admin_routes = init_users_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, &allowed_roles)?;

    // Attach the resolved identity for downstream handlers.
    parts.extensions.insert(auth_user);

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Admin-only gate for the user CRUD and visa write routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::{User, UserStatus};
    use chrono::Utc;
    use uuid::Uuid;

    fn test_user(role: UserRole) -> AuthUser {
        AuthUser(User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            username: "test.user1".to_string(),
            email: "test@example.com".to_string(),
            role,
            status: UserStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    #[test]
    fn admin_passes_admin_gate() {
        assert!(role_allowed(UserRole::Admin, &[UserRole::Admin]));
        assert!(check_any_role(&test_user(UserRole::Admin), &[UserRole::Admin]).is_ok());
    }

    #[test]
    fn agent_fails_admin_gate_with_forbidden() {
        let err = check_any_role(&test_user(UserRole::Agent), &[UserRole::Admin]).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn empty_allow_list_rejects_everyone() {
        assert!(!role_allowed(UserRole::Admin, &[]));
        assert!(check_any_role(&test_user(UserRole::Admin), &[]).is_err());
    }

    #[test]
    fn agent_passes_when_listed() {
        assert!(role_allowed(
            UserRole::Agent,
            &[UserRole::Admin, UserRole::Agent]
        ));
    }
}
