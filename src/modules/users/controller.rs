use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    CreateUserDto, MessageResponse, UpdateUserDto, UserListResponse, UserResponse,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all users
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Users fetched", body = UserListResponse),
        (status = 404, description = "No users found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, AppError> {
    let users = UserService::get_users(&state.db).await?;

    if users.is_empty() {
        return Err(AppError::not_found("No users found"));
    }

    Ok(Json(UserListResponse {
        status: "success".to_string(),
        message: "Users fetched successfully".to_string(),
        results: users.len(),
        data: users,
    }))
}

/// Fetch one user by username
#[utoipa::path(
    get,
    path = "/api/user/{username}",
    params(("username" = String, Path, description = "Unique username")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| AppError::not_found("Could not find user!"))?;

    Ok(Json(UserResponse {
        status: "success".to_string(),
        message: "User found successfully".to_string(),
        data: user,
    }))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/user",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error or duplicate username/email", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = UserService::create_user(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            status: "success".to_string(),
            message: "User created successfully".to_string(),
            data: user,
        }),
    ))
}

/// Update a user by username
#[utoipa::path(
    patch,
    path = "/api/user/{username}",
    params(("username" = String, Path, description = "Unique username")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 403, description = "Password field in body", body = ErrorResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UserResponse>, AppError> {
    if dto.touches_password() {
        return Err(AppError::forbidden(
            "Please use the /updateMyPassword route to change password",
        ));
    }

    let user = UserService::update_by_username(&state.db, &username, dto)
        .await?
        .ok_or_else(|| AppError::not_found("User not found."))?;

    Ok(Json(UserResponse {
        status: "success".to_string(),
        message: "User updated successfully".to_string(),
        data: user,
    }))
}

/// Delete a user by username
#[utoipa::path(
    delete,
    path = "/api/user/{username}",
    params(("username" = String, Path, description = "Unique username")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "Unknown username", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = UserService::delete_by_username(&state.db, &username).await?;

    if !deleted {
        return Err(AppError::not_found("User not found."));
    }

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: format!("User {username} deleted successfully"),
    }))
}
