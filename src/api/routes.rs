//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    catalog_handler, health_handler, invalidate_handler, login_handler, logout_handler,
    plays_handler, play_handler, stats_handler, AppState,
};
use crate::gate::admin_gate;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/catalog/:kind` - List products, categories or banners
/// - `POST /api/game/play` - Play the promo game, recording the play
/// - `GET /health` - Health check endpoint
/// - `GET /stats` - Lookup-cache statistics
/// - `POST /admin/login` - Obtain the admin cookie
/// - `POST /admin/logout` - Clear the admin cookie
/// - `POST /admin/plays` - List recorded plays (gated)
/// - `POST /admin/cache/invalidate` - Drop cache entries (gated)
///
/// # Middleware
/// - Access gate: redirects unauthenticated `/admin` requests to login
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/catalog/:kind", post(catalog_handler))
        .route("/api/game/play", post(play_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/admin/login", post(login_handler))
        .route("/admin/logout", post(logout_handler))
        .route("/admin/plays", post(plays_handler))
        .route("/admin/cache/invalidate", post(invalidate_handler))
        .layer(middleware::from_fn_with_state(state.clone(), admin_gate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
