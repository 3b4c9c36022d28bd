use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// The single GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// POST /graphql -- execute a query or mutation document.
///
/// The request gets its own clone of the pool handle; nothing is shared
/// between requests through the schema.
async fn execute(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner().data(state.pool.clone());
    state.schema.execute(request).await.into()
}

/// GET /graphql -- GraphiQL IDE, or 404 when disabled.
async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.config.graphiql_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphiql).post(execute))
}
