//! Authentication: login/logout, session issuance, and the self-service
//! account routes (profile, password change, soft delete).

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
