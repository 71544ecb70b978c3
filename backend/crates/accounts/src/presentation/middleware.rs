//! Role Gate Middleware
//!
//! Per-route middleware that requires a valid bearer token carrying a
//! specific role claim. Missing or invalid tokens produce 401; a valid
//! token with the wrong role produces 403 - the two cases are distinct.

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::token::{Claims, TokenService};
use crate::domain::value_object::account_role::AccountRole;
use crate::error::{AccountError, AccountResult};

/// Role gate attached to a route group
///
/// Pure function of the incoming request's token: no side effects, no
/// shared mutable state beyond the read-only signing key.
#[derive(Clone)]
pub struct RoleGate {
    tokens: Arc<TokenService>,
    required: AccountRole,
}

impl RoleGate {
    pub fn new(tokens: Arc<TokenService>, required: AccountRole) -> Self {
        Self { tokens, required }
    }

    /// Verify the bearer token and check the role claim
    pub fn authorize(&self, headers: &HeaderMap) -> AccountResult<Claims> {
        let claims = self.tokens.claims_from_headers(headers)?;

        if claims.role != self.required {
            return Err(AccountError::Forbidden);
        }

        Ok(claims)
    }
}

/// Middleware that requires the gate's role
///
/// On success the verified [`Claims`] are inserted into request
/// extensions for downstream handlers.
pub async fn require_role(
    gate: RoleGate,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = gate
        .authorize(req.headers())
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
