use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::require_admin;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::init_users_router;
use crate::modules::visas::router::init_visas_router;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Visa documents carry full testimonial/FAQ/package content, so the API
/// accepts bodies well past axum's 2 MB default.
const BODY_LIMIT: usize = 50 * 1024 * 1024;

pub fn init_router(state: AppState) -> Router {
    // Account/session routes and the admin user CRUD share the /api/user
    // prefix; the CRUD routes additionally require the admin role.
    let user_router = init_auth_router()
        .layer(GovernorLayer::new(
            state.rate_limit_config.auth_governor_config(),
        ))
        .merge(
            init_users_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/user", user_router)
                .nest("/visa", init_visas_router())
                .layer(DefaultBodyLimit::max(BODY_LIMIT))
                .layer(GovernorLayer::new(
                    state.rate_limit_config.general_governor_config(),
                )),
        )
        .fallback(unknown_route)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

async fn unknown_route(req: Request) -> AppError {
    AppError::not_found(format!("Can't find {} on this server", req.uri().path()))
}
