use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, SessionResponse, UpdatePasswordRequest};
use crate::modules::users::model::{
    CreateUserDto, MessageResponse, UpdateAccountDto, UpdateUserDto, User, UserListResponse,
    UserResponse, UserRole, UserStatus,
};
use crate::modules::visas::model::{
    CreateVisaDto, Faq, Package, PackagePricing, QuickFacts, Testimonial, UpdateVisaDto, Visa,
    VisaListResponse, VisaResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::current_user_info,
        crate::modules::auth::controller::update_current_user,
        crate::modules::auth::controller::update_password,
        crate::modules::auth::controller::delete_current_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::visas::controller::get_all_visas,
        crate::modules::visas::controller::get_visa,
        crate::modules::visas::controller::create_visa,
        crate::modules::visas::controller::update_visa,
        crate::modules::visas::controller::delete_visa,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserStatus,
            CreateUserDto,
            UpdateUserDto,
            UpdateAccountDto,
            UserResponse,
            UserListResponse,
            LoginRequest,
            UpdatePasswordRequest,
            SessionResponse,
            MessageResponse,
            ErrorResponse,
            Visa,
            QuickFacts,
            Testimonial,
            Faq,
            Package,
            PackagePricing,
            CreateVisaDto,
            UpdateVisaDto,
            VisaResponse,
            VisaListResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and logout"),
        (name = "Account", description = "Self-service for the logged-in user"),
        (name = "Users", description = "Admin user management endpoints"),
        (name = "Visas", description = "Visa catalog endpoints")
    ),
    info(
        title = "VisaWise API",
        version = "0.1.0",
        description = "REST API for a visa consulting service built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        contact(
            name = "API Support",
            email = "support@visawise.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
