//! Gate Policy Module
//!
//! Pure access decision for the protected admin surface. The policy is
//! a two-state machine per request: a path either passes through or is
//! redirected to the login surface, carrying the original path so the
//! caller can resume after authenticating.

// == Constants ==
/// Path prefix requiring a valid access token
pub const PROTECTED_PREFIX: &str = "/admin";

/// Login surface, reachable without a token
pub const LOGIN_PATH: &str = "/admin/login";

/// Cookie carrying the presented access token
pub const ADMIN_COOKIE: &str = "admin_token";

// == Gate Decision ==
/// Terminal outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Request may proceed to application logic
    Pass,
    /// Request is redirected to the contained location
    Redirect(String),
}

// == Decide ==
/// Evaluates the gate for a request path and an optionally presented
/// credential.
///
/// Paths outside the protected prefix pass, as does the login path
/// itself (exactly, not as a prefix). Everything else requires the
/// presented credential to equal the configured secret; otherwise the
/// request is redirected to `/admin/login?next=<original path>`.
///
/// Pure and non-failing: no retries, no rate limiting, no lockout.
pub fn decide(path: &str, presented: Option<&str>, secret: &str) -> GateDecision {
    if !path.starts_with(PROTECTED_PREFIX) || path == LOGIN_PATH {
        return GateDecision::Pass;
    }

    match presented {
        Some(token) if token == secret => GateDecision::Pass,
        _ => GateDecision::Redirect(format!("{}?next={}", LOGIN_PATH, path)),
    }
}
