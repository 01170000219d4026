//! Feature modules. Each follows the same structure: `controller.rs` (HTTP
//! handlers), `service.rs` (store operations), `model.rs` (entities and
//! DTOs), `router.rs` (route table).

pub mod auth;
pub mod users;
pub mod visas;
