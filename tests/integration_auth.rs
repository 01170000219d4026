mod common;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use common::{CLIENT_IP, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn login_with_empty_credentials_is_rejected() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/user/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "",
                "password": ""
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Username and password are required")
    );
}

#[tokio::test]
async fn login_with_missing_password_field_is_rejected() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/user/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "someagent"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/user/myAccount")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "You need to login to access this route.");
}

#[tokio::test]
async fn tampered_token_is_unauthorized() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/user/myAccount")
        .header(header::AUTHORIZATION, "Bearer not.a.realtoken")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn jwt_cookie_is_accepted_as_token_source() {
    let app = setup_test_app();

    // The cookie is found but fails verification, proving the cookie path
    // reaches token validation rather than the missing-token rejection.
    let request = Request::builder()
        .method("GET")
        .uri("/api/user/myAccount")
        .header(header::COOKIE, "jwt=garbage-token")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn logout_replaces_session_cookie() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/user/logout")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("jwt=loggedout"));

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn logout_succeeds_for_directly_connected_clients() {
    let app = setup_test_app();

    // No forwarding headers; the rate limiter must fall back to the peer
    // address that `serve` attaches per connection.
    let addr: SocketAddr = "192.0.2.15:53000".parse().unwrap();
    let request = Request::builder()
        .method("GET")
        .uri("/api/user/logout")
        .extension(ConnectInfo(addr))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.contains("jwt=loggedout"));
}

#[tokio::test]
async fn multi_megabyte_json_bodies_are_accepted() {
    let app = setup_test_app();

    // Past axum's 2 MB default; a full catalog document is comparable in
    // size. The request must reach validation (400), not die at 413.
    let request = Request::builder()
        .method("POST")
        .uri("/api/user/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "",
                "password": "",
                "padding": "x".repeat(3 * 1024 * 1024)
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_user_list_requires_authentication() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/user")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_password_requires_authentication() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("PATCH")
        .uri("/api/user/updateMyPassword")
        .header("content-type", "application/json")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::from(
            serde_json::to_string(&json!({
                "passwordCurrent": "oldpassword",
                "password": "newpassword",
                "passwordConfirm": "newpassword"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_route_reports_path() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/nowhere")
        .header("x-forwarded-for", CLIENT_IP)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Can't find /api/nowhere on this server");
}
