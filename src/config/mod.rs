//! Environment-sourced configuration.
//!
//! Each submodule loads one concern from the environment into an immutable
//! struct at startup:
//!
//! - [`cors`]: allowed origins
//! - [`database`]: PostgreSQL pool initialization
//! - [`jwt`]: signing secret, token lifetime, cookie lifetime, secure flag
//! - [`rate_limit`]: per-IP request budgets

pub mod cors;
pub mod database;
pub mod jwt;
pub mod rate_limit;
