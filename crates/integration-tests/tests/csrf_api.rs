//! CSRF issuance and double-submit validation scenarios.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use driftline_integration_tests::app;

/// Fetch `/api/csrf` and return (token from body, `Set-Cookie` value).
async fn bootstrap() -> (String, String) {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/csrf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let token = json["token"].as_str().unwrap().to_owned();

    (token, set_cookie)
}

fn subscribe_request(cookie: Option<&str>, header_token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/newsletter/subscribe")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = cookie {
        builder = builder.header(header::COOKIE, format!("csrf_token={value}"));
    }
    if let Some(value) = header_token {
        builder = builder.header("x-csrf-token", value);
    }
    builder
        .body(Body::from(r#"{"email":"reader@driftline.studio"}"#))
        .unwrap()
}

#[tokio::test]
async fn bootstrap_issues_token_and_cookie() {
    let (token, set_cookie) = bootstrap().await;

    assert!(!token.is_empty());
    assert!(set_cookie.starts_with("csrf_token="));
    assert!(set_cookie.contains(&token), "cookie must hold the body token");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=86400"));
    // Test config serves over http, so the cookie is not Secure here.
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn each_bootstrap_issues_a_fresh_token() {
    let (first, _) = bootstrap().await;
    let (second, _) = bootstrap().await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn matching_cookie_and_header_pass() {
    let (token, _) = bootstrap().await;

    let response = app()
        .oneshot(subscribe_request(Some(&token), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn mismatched_header_is_rejected() {
    let (token, _) = bootstrap().await;

    let response = app()
        .oneshot(subscribe_request(Some(&token), Some("not-the-token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_header_is_rejected() {
    let (token, _) = bootstrap().await;

    let response = app()
        .oneshot(subscribe_request(Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_cookie_is_rejected() {
    let (token, _) = bootstrap().await;

    let response = app()
        .oneshot(subscribe_request(None, Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_csrf_with_bad_email_is_a_bad_request() {
    let (token, _) = bootstrap().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/newsletter/subscribe")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("csrf_token={token}"))
        .header("x-csrf-token", &token)
        .body(Body::from(r#"{"email":"not-an-email"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
