//! Gate Middleware Module
//!
//! Request interceptor enforcing the admin access policy before any
//! handler runs.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::api::AppState;
use crate::gate::policy::{decide, GateDecision, ADMIN_COOKIE};

// == Admin Gate ==
/// Middleware applying the gate policy to every request.
///
/// Reads the presented token from the request's `Cookie` header and
/// either forwards the request or answers with a redirect to the login
/// surface, the originally requested path preserved in `next`.
pub async fn admin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let presented = cookie_value(request.headers(), ADMIN_COOKIE);

    match decide(&path, presented.as_deref(), &state.admin_secret) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::Redirect(location) => {
            debug!("Gated request to {} redirected to {}", path, location);
            Redirect::temporary(&location).into_response()
        }
    }
}

// == Cookie Value ==
/// Extracts one cookie's value from the `Cookie` header, if present.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key == name {
            Some(value.to_string())
        } else {
            None
        }
    })
}
