//! HTTP server setup and management

use std::future::Future;
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use crate::snapshot::SnapshotStore;
use super::handlers::{AppState, current_snapshot};

/// Request headers browsers may send cross-origin
pub const ALLOWED_HEADERS: [HeaderName; 6] = [
    header::ACCEPT,
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::ACCEPT_ENCODING,
    HeaderName::from_static("x-csrf-token"),
    header::AUTHORIZATION,
];

/// `ALLOWED_HEADERS` as a single header value
const ALLOWED_HEADERS_VALUE: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// Build the read-only router: `GET /` and nothing else
pub fn router(store: SnapshotStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(ALLOWED_HEADERS);

    Router::new()
        .route("/", get(current_snapshot))
        .layer(cors)
        // plain GETs carry the method and header lists too, not only preflights
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS_VALUE),
        ))
        .with_state(AppState::new(store))
}

/// Start the HTTP server, serving until `shutdown` resolves
///
/// Failing to bind is the only error; it is returned to the caller.
pub async fn start<F>(addr: &str, store: SnapshotStore, shutdown: F) -> crate::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}/", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
