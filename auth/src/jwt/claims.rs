use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by every access token.
///
/// `sub` holds the user id (as a string, per RFC 7519), `username` the
/// display name it was issued for. Both are set at issuance and read back
/// verbatim by the verifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username the token was issued for
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp); tokens without it never expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create non-expiring claims for a user, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username of the same user
    pub fn for_user(user_id: impl ToString, username: impl Into<String>) -> Self {
        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: Utc::now().timestamp(),
            exp: None,
        }
    }

    /// Expire `hours` after the issue time.
    ///
    /// # Errors
    /// * `LifetimeOutOfRange` - The expiry does not fit a Unix timestamp
    pub fn expiring_in_hours(mut self, hours: i64) -> Result<Self, JwtError> {
        let exp = Duration::try_hours(hours)
            .and_then(|lifetime| self.iat.checked_add(lifetime.num_seconds()))
            .ok_or(JwtError::LifetimeOutOfRange(hours))?;

        self.exp = Some(exp);
        Ok(self)
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
