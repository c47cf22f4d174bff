/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * opening the database, building the state, and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool and run migrations
 * 2. Build `AppState` from the pool and configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Unlike optional integrations, the database is required: a failure to
/// connect or migrate is returned to the caller and the server does not
/// start.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Inkpost backend server");

    let db_pool = load_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
