use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use super::FridgeSchema;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// `GET /` serves GraphiQL, `POST /` executes GraphQL requests.
pub fn router(schema: FridgeSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

pub async fn run_server(schema: FridgeSchema, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "GraphQL server listening");
    axum::serve(listener, router(schema)).await
}
