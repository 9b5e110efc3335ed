/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (auth, todos)
 * 2. Static files from `public/`
 * 3. JSON 404 for anything else
 *
 * Every response passes through request tracing and gzip compression, and
 * carries the security headers below unless the handler already set them.
 * No Content-Security-Policy is sent.
 */

use std::path::Path;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Directory the browser client is served from
pub const STATIC_DIR: &str = "public";

/// Security headers added to every response that lacks them
pub const SECURITY_HEADERS: [(&str, &str); 10] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "no-referrer"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("origin-agent-cluster", "?1"),
    ("x-dns-prefetch-control", "off"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Response for unknown paths and missing static files
pub async fn handle_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not Found" })),
    )
}

/// Create the Axum router with all routes configured
///
/// Serves static files from [`STATIC_DIR`].
pub fn create_router(app_state: AppState) -> Router<()> {
    create_router_with_static(app_state, STATIC_DIR)
}

/// Create the router, serving static files from `static_dir`
///
/// # Arguments
///
/// * `app_state` - Application state shared by all handlers
/// * `static_dir` - Directory holding `index.html` and the client bundle
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router_with_static(app_state: AppState, static_dir: impl AsRef<Path>) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    // Non-GET requests to unknown paths get the JSON 404 too, not a 405
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handle_404.into_service());

    let mut router = router.fallback_service(static_files);
    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(app_state)
}
