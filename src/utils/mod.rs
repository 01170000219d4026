//! Shared utilities.
//!
//! - [`errors`]: application error type and JSON error envelope
//! - [`jwt`]: session token signing and verification
//! - [`password`]: password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
