/**
 * Authentication Middleware
 *
 * Middleware protecting privileged routes. It extracts the bearer token
 * from the Authorization header, verifies it, and enforces the admin
 * role claim for the routes it wraps.
 */
use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;

/// Authenticated caller data extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
}

/// Admin guard middleware
///
/// 1. Extracts the JWT from the Authorization header (`Bearer <token>`)
/// 2. Verifies signature and expiry
/// 3. Rejects callers whose role claim is not `admin`
/// 4. Attaches the caller to request extensions for handlers
///
/// Returns 401 for a missing/invalid token and 403 for a valid token
/// without the admin role, leaving the wrapped handler untouched in
/// both cases.
pub async fn admin_middleware(
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("[Auth] Missing Authorization header");
            BackendError::unauthorized("Missing Authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("[Auth] Invalid Authorization header format");
        BackendError::unauthorized("Invalid Authorization header format")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("[Auth] Invalid token: {:?}", e);
        BackendError::unauthorized("Invalid token")
    })?;

    if !claims.is_admin() {
        tracing::warn!("[Auth] Non-admin caller {} denied", claims.username);
        return Err(BackendError::forbidden("Access denied. Admins only."));
    }

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| BackendError::unauthorized("Invalid user id in token"))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}
