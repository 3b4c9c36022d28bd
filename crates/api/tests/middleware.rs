//! Middleware behavior driven by `ServerConfig`: allowed CORS origins.

mod common;

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN,
};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{build_app_with_config, get, test_config};

async fn preflight(app: Router, origin: &str) -> Response {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header(ORIGIN, origin)
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

fn app_allowing(pool: PgPool, origins: &[&str]) -> Router {
    let mut config = test_config();
    config.cors_origins = origins.iter().map(|o| o.to_string()).collect();
    build_app_with_config(pool, config)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_configured_origin_is_allowed(pool: PgPool) {
    let app = app_allowing(pool, &["https://films.example.org"]);

    let response = preflight(app, "https://films.example.org").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://films.example.org"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_unlisted_origin_gets_no_allow_header(pool: PgPool) {
    let app = app_allowing(pool, &["https://films.example.org"]);

    let response = preflight(app, "http://localhost:5173").await;

    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_configured_origin_is_allowed(pool: PgPool) {
    let origins = ["https://films.example.org", "http://localhost:8080"];

    for origin in origins {
        let app = app_allowing(pool.clone(), &origins);
        let response = preflight(app, origin).await;
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], origin);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_origin_is_skipped_and_app_still_serves(pool: PgPool) {
    let app = app_allowing(pool, &["bad\norigin", "https://films.example.org"]);

    let response = preflight(app.clone(), "https://films.example.org").await;
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://films.example.org"
    );

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(CONTENT_TYPE).is_some());
}
