//! HTTP application assembly.

use axum::{Router, middleware};

use crate::core::ServerState;

/// HTTP request log middleware
pub async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        // Client and project tree APIs
        .merge(crate::api::clients::router())
        .merge(crate::api::projects::router())
        .merge(crate::api::phases::router())
        .merge(crate::api::variants::router())
        .merge(crate::api::rooms::router())
        .merge(crate::api::room_products::router())
        // Catalog and document APIs
        .merge(crate::api::products::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::invoices::router())
        .merge(crate::api::offers::router())
}
