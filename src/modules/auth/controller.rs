use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{LoginRequest, SessionResponse, UpdatePasswordRequest};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{MessageResponse, UpdateAccountDto, UserResponse};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[derive(serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 400, description = "Username or password missing", body = ErrorResponse),
        (status = 401, description = "Incorrect password", body = ErrorResponse),
        (status = 404, description = "User does not exist", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let (token, user) = AuthService::login(&state.db, dto, &state.jwt_config).await?;

    let jar = jar.add(AuthService::session_cookie(token.clone(), &state.jwt_config));

    Ok((
        jar,
        Json(SessionResponse {
            status: "success".to_string(),
            token,
            data: user,
        }),
    ))
}

/// Clear the identity cookie
#[utoipa::path(
    get,
    path = "/api/user/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(AuthService::logout_cookie());

    (
        jar,
        Json(MessageResponse {
            status: "success".to_string(),
            message: "You have been logged out.".to_string(),
        }),
    )
}

/// Fetch the logged-in user's record
#[utoipa::path(
    get,
    path = "/api/user/myAccount",
    responses(
        (status = 200, description = "User data", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User data not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
#[instrument(skip(state, auth_user))]
pub async fn current_user_info(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::find_by_id(&state.db, auth_user.0.id)
        .await?
        .ok_or_else(|| AppError::not_found("Your data was not found. Please try again later."))?;

    Ok(Json(UserResponse {
        status: "success".to_string(),
        message: "User data fetched successfully".to_string(),
        data: user,
    }))
}

/// Update the logged-in user's profile
#[utoipa::path(
    patch,
    path = "/api/user/updateMyAccount",
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Password field in body", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateAccountDto>,
) -> Result<Json<MessageResponse>, AppError> {
    if dto.touches_password() {
        return Err(AppError::forbidden(
            "Please use another route for updating password",
        ));
    }

    UserService::update_account(&state.db, auth_user.0.id, dto)
        .await?
        .ok_or_else(|| AppError::not_found("Could not find user"))?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "User updated successfully".to_string(),
    }))
}

/// Change password and receive a fresh session token
#[utoipa::path(
    patch,
    path = "/api/user/updateMyPassword",
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password changed, new session issued", body = SessionResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Wrong current password", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
#[instrument(skip(state, jar, auth_user, dto))]
pub async fn update_password(
    State(state): State<AppState>,
    jar: CookieJar,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdatePasswordRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let (token, user) =
        AuthService::update_password(&state.db, auth_user.0.id, dto, &state.jwt_config).await?;

    let jar = jar.add(AuthService::session_cookie(token.clone(), &state.jwt_config));

    Ok((
        jar,
        Json(SessionResponse {
            status: "success".to_string(),
            token,
            data: user,
        }),
    ))
}

/// Soft-delete the logged-in user's account
#[utoipa::path(
    delete,
    path = "/api/user/deleteMyAccount",
    responses(
        (status = 204, description = "Account deactivated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Account"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<StatusCode, AppError> {
    UserService::deactivate(&state.db, auth_user.0.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
