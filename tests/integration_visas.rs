mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{CLIENT_IP, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn creating_a_visa_requires_authentication() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/visa")
        .header("content-type", "application/json")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Schengen Visa",
                "slug": "schengen-visa"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_a_visa_requires_authentication() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/visa/schengen-visa")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn updating_a_visa_with_bad_token_is_unauthorized() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("PATCH")
        .uri("/api/visa/schengen-visa")
        .header("content-type", "application/json")
        .header(header::AUTHORIZATION, "Bearer stale.or.forged")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "Renamed" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Invalid or expired token");
}
