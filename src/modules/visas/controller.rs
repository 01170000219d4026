use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::UserRole;
use crate::modules::visas::model::{
    CreateVisaDto, UpdateVisaDto, VisaEnvelope, VisaListResponse, VisaResponse, VisasEnvelope,
};
use crate::modules::visas::service::VisaService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List the visa catalog
#[utoipa::path(
    get,
    path = "/api/visa",
    responses(
        (status = 200, description = "All visas", body = VisaListResponse),
        (status = 404, description = "Empty catalog", body = ErrorResponse)
    ),
    tag = "Visas"
)]
#[instrument(skip(state))]
pub async fn get_all_visas(
    State(state): State<AppState>,
) -> Result<Json<VisaListResponse>, AppError> {
    let visas = VisaService::get_all(&state.db).await?;

    if visas.is_empty() {
        return Err(AppError::not_found("No visas found"));
    }

    Ok(Json(VisaListResponse {
        status: "success".to_string(),
        message: "All visas fetched successfully".to_string(),
        results: visas.len(),
        data: VisasEnvelope { visas },
    }))
}

/// Fetch one visa by slug
#[utoipa::path(
    get,
    path = "/api/visa/{slug}",
    params(("slug" = String, Path, description = "URL slug of the visa")),
    responses(
        (status = 200, description = "Visa details", body = VisaResponse),
        (status = 404, description = "Unknown slug", body = ErrorResponse)
    ),
    tag = "Visas"
)]
#[instrument(skip(state))]
pub async fn get_visa(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<VisaResponse>, AppError> {
    let visa = VisaService::find_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::not_found("Could not find visa details"))?;

    Ok(Json(VisaResponse {
        status: "success".to_string(),
        message: "Visa details fetched successfully".to_string(),
        data: VisaEnvelope { visa },
    }))
}

/// Create a visa (admin only)
#[utoipa::path(
    post,
    path = "/api/visa",
    request_body = CreateVisaDto,
    responses(
        (status = 201, description = "Visa created", body = VisaResponse),
        (status = 400, description = "Validation error or duplicate name/slug", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Visas"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_visa(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateVisaDto>,
) -> Result<(StatusCode, Json<VisaResponse>), AppError> {
    check_any_role(&auth_user, &[UserRole::Admin])?;

    let visa = VisaService::create(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(VisaResponse {
            status: "success".to_string(),
            message: "Visa created successfully".to_string(),
            data: VisaEnvelope { visa },
        }),
    ))
}

/// Update a visa by slug (admin only)
#[utoipa::path(
    patch,
    path = "/api/visa/{slug}",
    params(("slug" = String, Path, description = "URL slug of the visa")),
    request_body = UpdateVisaDto,
    responses(
        (status = 200, description = "Visa updated", body = VisaResponse),
        (status = 404, description = "Unknown slug", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Visas"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_visa(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateVisaDto>,
) -> Result<Json<VisaResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::Admin])?;

    let visa = VisaService::update_by_slug(&state.db, &slug, dto)
        .await?
        .ok_or_else(|| AppError::not_found("No visa found with that ID"))?;

    Ok(Json(VisaResponse {
        status: "success".to_string(),
        message: "Visa updated successfully".to_string(),
        data: VisaEnvelope { visa },
    }))
}

/// Delete a visa by slug (admin only)
#[utoipa::path(
    delete,
    path = "/api/visa/{slug}",
    params(("slug" = String, Path, description = "URL slug of the visa")),
    responses(
        (status = 204, description = "Visa deleted"),
        (status = 404, description = "Unknown slug", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Visas"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_visa(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    check_any_role(&auth_user, &[UserRole::Admin])?;

    let deleted = VisaService::delete_by_slug(&state.db, &slug).await?;

    if !deleted {
        return Err(AppError::not_found("No visa found with that ID"));
    }

    Ok(StatusCode::NO_CONTENT)
}
