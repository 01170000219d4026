use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use super::controller::{
    current_user_info, delete_current_user, login, logout, update_current_user, update_password,
};
use crate::state::AppState;

/// Public session routes plus the self-service account routes. The account
/// handlers authenticate through the `AuthUser` extractor, so no layer is
/// needed here.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/myAccount", get(current_user_info))
        .route("/updateMyAccount", patch(update_current_user))
        .route("/updateMyPassword", patch(update_password))
        .route("/deleteMyAccount", delete(delete_current_user))
}
