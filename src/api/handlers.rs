//! API Handlers
//!
//! HTTP request handlers for each storefront endpoint.

use std::sync::Arc;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use tracing::{info, warn};

use crate::cache::{make_key, LookupCache};
use crate::config::Config;
use crate::datastore::{Row, TableStore};
use crate::error::{ApiError, Result};
use crate::gate::ADMIN_COOKIE;
use crate::models::{
    HealthResponse, InvalidateRequest, InvalidateResponse, ListingRequest, ListingResponse,
    LoginRequest, MessageResponse, PlayRequest, PlayResponse, PlaysResponse, StatsResponse,
};

// == Catalog Kinds ==
/// Listing namespaces served by the catalog endpoint; each maps to a
/// datastore table of the same name.
pub const CATALOG_KINDS: [&str; 3] = ["products", "categories", "banners"];

/// Table recording game plays
const PLAYS_TABLE: &str = "plays";

/// Table holding the configured prizes
const PRIZES_TABLE: &str = "prizes";

// == App State ==
/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lookup cache consulted before datastore reads
    pub cache: Arc<RwLock<LookupCache>>,
    /// External data-store collaborator
    pub store: Arc<TableStore>,
    /// Shared secret gating the admin surface
    pub admin_secret: String,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: LookupCache, store: TableStore, admin_secret: impl Into<String>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            store: Arc::new(store),
            admin_secret: admin_secret.into(),
        }
    }

    /// Creates a new AppState from configuration, with an empty store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LookupCache::new(config.default_ttl),
            TableStore::new(),
            config.admin_secret.clone(),
        )
    }
}

// == Catalog Handler ==
/// Handler for POST /api/catalog/:kind
///
/// Read-through listing: consult the lookup cache under a key derived
/// from the kind and filters, fall back to the datastore on a miss and
/// populate the cache with the default TTL.
pub async fn catalog_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<ListingRequest>,
) -> Result<Json<ListingResponse>> {
    if !CATALOG_KINDS.contains(&kind.as_str()) {
        return Err(ApiError::MalformedInput(format!(
            "unknown catalog kind '{}'",
            kind
        )));
    }

    let key = make_key(&kind, &req.filters);

    // Write lock even for the read path: an expired entry is removed
    // by the read that finds it.
    if let Some(value) = state.cache.write().await.get(&key) {
        let items: Vec<Row> = serde_json::from_value(value)
            .map_err(|e| ApiError::Internal(format!("corrupt cache entry: {}", e)))?;
        return Ok(Json(ListingResponse::new(kind, items, true)));
    }

    let items = state.store.select_where(&kind, &req.filters).await?;

    let cached_value = serde_json::to_value(&items)
        .map_err(|e| ApiError::Internal(format!("unserializable rows: {}", e)))?;
    state.cache.write().await.set(key, cached_value, None);

    Ok(Json(ListingResponse::new(kind, items, false)))
}

// == Play Handler ==
/// Handler for POST /api/game/play
///
/// Awards a prize by rotating over the configured prize table and
/// records the play in the datastore.
pub async fn play_handler(
    State(state): State<AppState>,
    Json(req): Json<PlayRequest>,
) -> Result<Json<PlayResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::MalformedInput(error_msg));
    }
    let player = req.player.unwrap_or_default();

    let prizes = state.store.select_all(PRIZES_TABLE).await?;
    if prizes.is_empty() {
        return Err(ApiError::Internal("no prizes configured".to_string()));
    }

    let plays = state.store.select_all(PLAYS_TABLE).await.unwrap_or_default();
    let winner = &prizes[plays.len() % prizes.len()];
    let prize = winner
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("unnamed prize")
        .to_string();

    let played_at = chrono::Utc::now().to_rfc3339();
    let mut record = Row::new();
    record.insert("player".to_string(), player.clone().into());
    record.insert("prize".to_string(), prize.clone().into());
    record.insert("played_at".to_string(), played_at.clone().into());
    state.store.insert(PLAYS_TABLE, record).await?;

    info!("Recorded play by '{}' winning '{}'", player, prize);

    Ok(Json(PlayResponse::new(player, prize, played_at)))
}

// == Login Handler ==
/// Handler for POST /admin/login
///
/// Compares the posted secret against the configured one; on success
/// sets the admin cookie so subsequent requests pass the gate.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::MalformedInput(error_msg));
    }

    let secret = req.secret.unwrap_or_default();
    if secret != state.admin_secret {
        warn!("Rejected admin login with wrong secret");
        return Err(ApiError::Unauthorized("wrong secret".to_string()));
    }

    let cookie = format!("{}={}; Path=/; HttpOnly", ADMIN_COOKIE, secret);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("Logged in")),
    ))
}

// == Logout Handler ==
/// Handler for POST /admin/logout
///
/// Clears the admin cookie by expiring it immediately.
pub async fn logout_handler() -> impl IntoResponse {
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", ADMIN_COOKIE);
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("Logged out")),
    )
}

// == Plays Handler ==
/// Handler for POST /admin/plays
///
/// Lists every recorded game play.
pub async fn plays_handler(State(state): State<AppState>) -> Result<Json<PlaysResponse>> {
    let plays = state.store.select_all(PLAYS_TABLE).await?;
    Ok(Json(PlaysResponse::new(plays)))
}

// == Invalidate Handler ==
/// Handler for POST /admin/cache/invalidate
///
/// Drops one cache entry, or every entry when no key is given.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>> {
    let mut cache = state.cache.write().await;

    let invalidated = match req.key.as_deref() {
        Some(key) => {
            if cache.invalidate(key) {
                1
            } else {
                0
            }
        }
        None => cache.invalidate_all(),
    };

    info!("Invalidated {} cache entries", invalidated);
    Ok(Json(InvalidateResponse::new(invalidated)))
}

// == Stats Handler ==
/// Handler for GET /stats
///
/// Returns current lookup-cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.total_entries,
    ))
}

// == Health Handler ==
/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
