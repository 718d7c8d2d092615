/// JWT Token Generation and Validation
///
/// Signed, time-limited bearer tokens (HS256) bound to a user's email.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError};

/// Issue a new bearer token for a user.
///
/// # Errors
/// Returns error if token signing fails.
pub fn generate_token(email: &str, config: &JwtSettings) -> Result<String, AppError> {
    let claims = Claims::new(email, config.token_expiry, config.issuer.clone());

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

/// Verify signature, expiry, and issuer of a token and return its claims.
///
/// # Errors
/// Returns `AuthError::TokenExpired` for expired tokens and
/// `AuthError::TokenInvalid` for tampered or otherwise malformed ones.
pub fn validate_token(token: &str, config: &JwtSettings) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("JWT validation error: {}", e);
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Auth(AuthError::TokenExpired)
            }
            _ => AppError::Auth(AuthError::TokenInvalid),
        }
    })
}
