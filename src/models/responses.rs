//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies. Success
//! responses carry `"success": true`; errors are rendered by
//! `ApiError` with the matching `"success": false` shape.

use serde::Serialize;

use crate::datastore::Row;

/// Response body for catalog listings (POST /api/catalog/:kind)
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub success: bool,
    /// Which listing was requested (products, categories, banners)
    pub kind: String,
    /// Matching rows
    pub items: Vec<Row>,
    /// Whether the result came from the lookup cache
    pub cached: bool,
}

impl ListingResponse {
    /// Creates a new ListingResponse
    pub fn new(kind: impl Into<String>, items: Vec<Row>, cached: bool) -> Self {
        Self {
            success: true,
            kind: kind.into(),
            items,
            cached,
        }
    }
}

/// Response body for a game play (POST /api/game/play)
#[derive(Debug, Clone, Serialize)]
pub struct PlayResponse {
    pub success: bool,
    /// Who played
    pub player: String,
    /// The awarded prize name
    pub prize: String,
    /// When the play was recorded (RFC 3339)
    pub played_at: String,
}

impl PlayResponse {
    /// Creates a new PlayResponse
    pub fn new(
        player: impl Into<String>,
        prize: impl Into<String>,
        played_at: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            player: player.into(),
            prize: prize.into(),
            played_at: played_at.into(),
        }
    }
}

/// Response body for admin login/logout and other message-only calls
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Creates a new successful MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Response body for the play listing (POST /admin/plays)
#[derive(Debug, Clone, Serialize)]
pub struct PlaysResponse {
    pub success: bool,
    pub plays: Vec<Row>,
}

impl PlaysResponse {
    /// Creates a new PlaysResponse
    pub fn new(plays: Vec<Row>) -> Self {
        Self {
            success: true,
            plays,
        }
    }
}

/// Response body for cache invalidation (POST /admin/cache/invalidate)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub success: bool,
    /// How many entries were dropped
    pub invalidated: usize,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(invalidated: usize) -> Self {
        Self {
            success: true,
            invalidated,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries dropped by TTL expiry
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, expirations: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            expirations,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
