//! User management: the user entity shared with the auth chain, plus the
//! admin-only CRUD surface keyed by username.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
