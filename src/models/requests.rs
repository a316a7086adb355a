//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Request body for catalog listings (POST /api/catalog/:kind)
///
/// # Fields
/// - `filters`: optional equality filters applied to the listing; an
///   absent or empty map selects everything
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingRequest {
    /// Equality filters, column name to expected value
    #[serde(default)]
    pub filters: Map<String, Value>,
}

/// Request body for a game play (POST /api/game/play)
#[derive(Debug, Clone, Deserialize)]
pub struct PlayRequest {
    /// Who is playing; required and non-empty
    #[serde(default)]
    pub player: Option<String>,
}

impl PlayRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.player.as_deref() {
            None => Some("player is required".to_string()),
            Some("") => Some("player cannot be empty".to_string()),
            Some(_) => None,
        }
    }
}

/// Request body for admin login (POST /admin/login)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// The shared admin secret
    #[serde(default)]
    pub secret: Option<String>,
}

impl LoginRequest {
    /// Returns an error message if the body is unusable, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.secret.as_deref() {
            None | Some("") => Some("secret is required".to_string()),
            Some(_) => None,
        }
    }
}

/// Request body for cache invalidation (POST /admin/cache/invalidate)
///
/// Omitting `key` clears the entire cache.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvalidateRequest {
    /// Single key to drop; everything when absent
    #[serde(default)]
    pub key: Option<String>,
}
