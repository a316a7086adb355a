//! Gate Module
//!
//! Access gate for the `/admin` surface: a pure pass/redirect policy
//! plus the axum middleware that enforces it.

mod middleware;
mod policy;

pub use middleware::{admin_gate, cookie_value};
pub use policy::{decide, GateDecision, ADMIN_COOKIE, LOGIN_PATH, PROTECTED_PREFIX};
