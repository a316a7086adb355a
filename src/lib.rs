//! Storefront - e-commerce backend service
//!
//! Serves catalog listings through an ephemeral lookup cache, runs the
//! promotional game, and gates the admin surface behind a shared-secret
//! cookie.

pub mod api;
pub mod cache;
pub mod config;
pub mod datastore;
pub mod error;
pub mod gate;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
