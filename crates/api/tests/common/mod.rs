#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use cinedex_api::app::build_app;
use cinedex_api::config::ServerConfig;
use cinedex_api::graphql;
use cinedex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        graphiql_enabled: true,
    }
}

/// Build the production router (`cinedex_api::app::build_app`) over the
/// given pool and configuration.
pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(config),
        schema: graphql::build_schema(),
    })
}

/// Build the application with the default test configuration.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a GraphQL document with variables and return the parsed response
/// envelope (`data` and optional `errors`).
pub async fn graphql(app: &Router, query: &str, variables: Value) -> Value {
    let body = json!({ "query": query, "variables": variables });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Like [`graphql`] but panics if the response carries errors.
pub async fn graphql_ok(app: &Router, query: &str, variables: Value) -> Value {
    let json = graphql(app, query, variables).await;
    assert!(
        json.get("errors").is_none(),
        "unexpected GraphQL errors: {}",
        json["errors"]
    );
    json["data"].clone()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const CREATE_GENRE: &str = r#"
    mutation($name: String!, $movieId: Int) {
        createGenre(name: $name, movieId: $movieId) { id name movieId }
    }
"#;

pub const CREATE_MOVIE: &str = r#"
    mutation($title: String!, $director: String!, $year: Int!, $genreId: Int!) {
        createMovie(title: $title, director: $director, year: $year, genreId: $genreId) {
            id title director year genreId
        }
    }
"#;

/// Create a genre through the API and return its id.
pub async fn create_genre(app: &Router, name: &str) -> i64 {
    let data = graphql_ok(app, CREATE_GENRE, json!({ "name": name })).await;
    id_of(&data["createGenre"])
}

/// Create a movie through the API and return its id.
pub async fn create_movie(
    app: &Router,
    title: &str,
    director: &str,
    year: i32,
    genre_id: i64,
) -> i64 {
    let data = graphql_ok(
        app,
        CREATE_MOVIE,
        json!({ "title": title, "director": director, "year": year, "genreId": genre_id }),
    )
    .await;
    id_of(&data["createMovie"])
}

/// Parse the `id` field (a GraphQL `ID`, serialized as a string).
pub fn id_of(object: &Value) -> i64 {
    object["id"]
        .as_str()
        .expect("id should be a string")
        .parse()
        .expect("id should be numeric")
}

/// Count rows in a table directly.
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
