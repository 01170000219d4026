use axum::{Router, routing::get};

use crate::modules::visas::controller::{
    create_visa, delete_visa, get_all_visas, get_visa, update_visa,
};
use crate::state::AppState;

/// Catalog reads are public; the write handlers authenticate and role-gate
/// per route (protect + restrictTo(admin)).
pub fn init_visas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_visas).post(create_visa))
        .route(
            "/{slug}",
            get(get_visa).patch(update_visa).delete(delete_visa),
        )
}
