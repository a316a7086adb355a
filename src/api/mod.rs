//! API Module
//!
//! HTTP handlers and routing for the storefront REST API.
//!
//! # Endpoints
//! - `POST /api/catalog/:kind` - List products, categories or banners
//! - `POST /api/game/play` - Play the promo game
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Lookup-cache statistics
//! - `POST /admin/*` - Gated admin surface (login, logout, plays,
//!   cache invalidation)

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
