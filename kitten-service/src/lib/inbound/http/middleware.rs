use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use super::errors::ApiError;
use crate::domain::user::models::UserId;

/// Routes reachable without a bearer token, as (method, path) pairs.
const PUBLIC_ROUTES: [(&str, &str); 3] = [
    ("GET", "/"),
    ("POST", "/register"),
    ("POST", "/login"),
];

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthenticated("Authentication required".to_string()))
    }
}

/// HEAD requests match the GET entries.
pub fn is_public_route(method: &Method, path: &str) -> bool {
    let method = if *method == Method::HEAD {
        &Method::GET
    } else {
        method
    };

    PUBLIC_ROUTES
        .iter()
        .any(|(public_method, public_path)| {
            method.as_str() == *public_method && path == *public_path
        })
}

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// Runs in front of routing, so it also guards unknown paths.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if is_public_route(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let token = extract_token_from_header(&req)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Unauthenticated("Invalid or expired token".to_string())
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse user ID from token");
        ApiError::Unauthenticated("Invalid token format".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthenticated("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthenticated("Invalid Authorization header".to_string()))?;

    match auth_str.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(ApiError::Unauthenticated(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )),
    }
}
