//! Request middleware.
//!
//! The auth chain is an ordered pair of stages:
//!
//! 1. [`auth::AuthUser`]: authentication gate ("protect"): token lookup,
//!    verification, and re-resolution of the user against the store.
//! 2. [`role`]: authorization gate ("restrictTo"): pure role predicate
//!    over the resolved identity, applied as a route layer.

pub mod auth;
pub mod role;
