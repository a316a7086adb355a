//! Cache Module
//!
//! Ephemeral lookup cache consulted before external data-store reads,
//! with TTL expiry and deterministic key construction.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::make_key;
pub use stats::CacheStats;
pub use store::LookupCache;
