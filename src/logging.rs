//! Request logging middleware.
//!
//! Each request gets a generated request id and is logged on completion with
//! its method, matched path, status, and latency. The log level follows the
//! status class: 5xx logs at error, 4xx at warn, everything else at info.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use uuid::Uuid;

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let status = response.status();
    let latency = start.elapsed();

    if status.is_server_error() {
        error!(%request_id, %method, %path, %status, ?latency, "request failed");
    } else if status.is_client_error() {
        warn!(%request_id, %method, %path, %status, ?latency, "request rejected");
    } else {
        info!(%request_id, %method, %path, %status, ?latency, "request completed");
    }

    response
}
