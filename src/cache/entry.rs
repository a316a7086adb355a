//! Cache Entry Module
//!
//! Defines the structure for individual lookup-cache entries with TTL.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached lookup result with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached value (opaque JSON)
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds); every entry expires
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_seconds` from now.
    pub fn new(value: Value, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired.
    ///
    /// Boundary condition: an entry is live while the current time is
    /// less than or equal to `expires_at`; a read strictly after that
    /// instant treats it as absent.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds, zero once expired.
    #[allow(dead_code)]
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
