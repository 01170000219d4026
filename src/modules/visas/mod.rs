//! Visa catalog: informational content plus pricing packages, keyed by slug.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
