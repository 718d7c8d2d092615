/// JWT Claims structure
///
/// Payload of a bearer token: standard JWT claims (RFC 7519) with the
/// authenticated user's email as the subject.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Create new claims bound to a user's email.
    pub fn new(email: impl Into<String>, expiry_seconds: i64, issuer: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: email.into(),
            exp: now + expiry_seconds,
            iat: now,
            iss: issuer,
        }
    }

    /// The email the token is bound to.
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Check if the token has expired.
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        self.exp < now
    }
}
