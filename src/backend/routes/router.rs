/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. User routes (public)
 * 2. Blog routes (auth gate)
 * 3. Fallback handler (404)
 *
 * # Layers
 *
 * Every request is traced with `TraceLayer` and cross-origin requests are
 * allowed with a permissive CORS layer, so a browser front end on another
 * origin can call the API.
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::blog_routes::configure_blog_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state: database pool, token keys, hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_user_routes(router);
    let router = configure_blog_routes(router, app_state.clone());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
