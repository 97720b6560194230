//! HTTP Router
//!
//! Wires the clouds endpoint, the health/readiness probes and CORS onto a
//! single axum [`Router`].

use crate::catalog::cache::CatalogCache;
use crate::catalog::source::CatalogSource;
use crate::clouds::handlers::handle_get_clouds;
use axum::http::{HeaderValue, StatusCode};
use axum::{routing::get, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Public endpoint listing clouds and providers.
pub const ENDPOINT_CLOUDS: &str = "/clouds/";
/// Same endpoint without the trailing slash.
pub const ENDPOINT_CLOUDS_NO_SLASH: &str = "/clouds";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Readiness probe: OK once the catalog has been fetched.
pub const ENDPOINT_READY: &str = "/ready";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub fn build_router<S: CatalogSource>(
    cache: Arc<CatalogCache<S>>,
    allowed_origins: &[String],
) -> Router {
    Router::new()
        .route(ENDPOINT_CLOUDS, get(handle_get_clouds::<S>))
        .route(ENDPOINT_CLOUDS_NO_SLASH, get(handle_get_clouds::<S>))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_READY, get(handle_ready::<S>))
        .layer(Extension(cache))
        .layer(build_cors_layer(allowed_origins))
}

/// Any method and header from the configured origins, credentials allowed.
///
/// Wildcards cannot be combined with credentials, so methods and headers are
/// mirrored from the request, and a `*` origin mirrors the caller's origin.
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let mut origins = Vec::new();
        for origin in allowed_origins {
            match HeaderValue::from_str(origin) {
                Ok(value) => origins.push(value),
                Err(_) => tracing::warn!("Ignoring invalid CORS origin: {}", origin),
            }
        }
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn handle_health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

async fn handle_ready<S: CatalogSource>(
    Extension(cache): Extension<Arc<CatalogCache<S>>>,
) -> (StatusCode, Json<StatusResponse>) {
    if cache.is_loaded() {
        (StatusCode::OK, Json(StatusResponse { status: "ready" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusResponse { status: "loading" }),
        )
    }
}
