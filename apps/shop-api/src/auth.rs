//! Caller identity.
//!
//! Tokens are issued by an external identity provider and signed with a
//! shared HS256 secret. This module only verifies them and exposes the
//! subject as the caller's username; no roles or permissions are evaluated.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Verifies bearer tokens against the shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier for HS256 tokens signed with `secret`.
    pub fn new(secret: &str) -> Self {
        TokenVerifier {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Validate and decode a token.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        if token_data.claims.sub.is_empty() {
            return Err(ApiError::unauthorized("Token has an empty subject"));
        }

        Ok(token_data.claims)
    }

    /// Sign a token for `username`, valid for `lifetime_secs`.
    ///
    /// Production tokens come from the identity provider; this exists for
    /// local development and tests.
    pub fn issue(&self, username: &str, lifetime_secs: i64) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(lifetime_secs)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Failed to generate token: {}", e)))
    }
}

/// Extract bearer token from authorization header.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The authenticated caller, placed in request extensions by
/// [`require_auth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub username: String,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Caller>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Request is not authenticated"))
    }
}

/// Rejects requests without a valid bearer token and records the caller.
pub async fn require_auth(
    State(verifier): State<TokenVerifier>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or_else(|| {
            warn!("Missing or invalid authorization header");
            ApiError::unauthorized("Missing bearer token")
        })?;

    let claims = verifier.verify(token).inspect_err(|e| {
        warn!(error = %e, "Token validation failed");
    })?;

    debug!(username = %claims.sub, "Caller authenticated");
    request.extensions_mut().insert(Caller {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}
