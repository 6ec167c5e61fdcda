// ============================
// crates/backend-lib/src/middleware/basic_auth.rs
// ============================
//! HTTP Basic Authentication gate.
//!
//! Composed in front of the router as an explicit middleware; it takes the
//! verifier as a capability through `AppState` rather than through any
//! framework-global registry.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::auth::AuthenticatedUser;
use crate::directory::EmployeeDirectory;
use crate::error::AppError;
use crate::AppState;

/// Challenge sent on every 401 response.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"staffdir\"";

/// Require valid Basic credentials on the request.
///
/// A missing or malformed `Authorization` header gets the same response as
/// a failed verification; the client learns nothing about which it was. On
/// success the request gains an [`AuthenticatedUser`] extension.
pub async fn require_basic_auth<D: EmployeeDirectory + 'static>(
    State(state): State<Arc<AppState<D>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic);

    let Some((username, password)) = credentials else {
        return Err(AppError::Auth("invalid credentials".to_string()));
    };

    if !state.auth.verify(&username, &password) {
        // Log the claimed identity only; the password never reaches a log.
        tracing::warn!(username, "basic auth rejected");
        return Err(AppError::Auth("invalid credentials".to_string()));
    }

    let role = state
        .auth
        .lookup(&username)
        .map(|record| record.role)
        .unwrap_or_default();

    tracing::debug!(username, "basic auth accepted");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { username, role });

    Ok(next.run(request).await)
}

/// Decode `Basic <base64(username:password)>`.
///
/// Returns `None` on any malformed input: wrong scheme, invalid base64,
/// non-UTF-8 payload, or a payload without a colon.
fn decode_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (username, password) = text.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
