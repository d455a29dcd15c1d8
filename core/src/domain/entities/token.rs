//! Token claim set and issued-token value types.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default refresh token lifetime in days
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for the JWT payload.
///
/// Access and refresh tokens share the same shape; only refresh claims
/// carry `exp`. Access token expiry rides on the transport cookie lifetime
/// instead of a self-contained claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,

    /// Email, used as the secondary identity lookup key on refresh
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// JWT ID, a fresh UUID per issued token. Not consulted during
    /// verification today; reserved as a replay-detection key.
    pub jti: String,

    /// Expiration timestamp, present only on refresh claims
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates claims for an access token (no embedded expiry).
    pub fn new_access(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            sub: user_id,
            email: email.into(),
            iat: Utc::now().timestamp(),
            jti: Uuid::new_v4().to_string(),
            exp: None,
        }
    }

    /// Creates claims for a refresh token expiring `expiry_days` from now.
    pub fn new_refresh(user_id: i64, email: impl Into<String>, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            email: email.into(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            exp: Some((now + Duration::days(expiry_days)).timestamp()),
        }
    }

    /// Whether an `exp` claim exists and lies in the past.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}

/// Token pair handed to the client at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: i64,
}

/// Result of a successful refresh: a new access token only. The refresh
/// token is deliberately not rotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub access_token: String,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_have_no_expiry() {
        let claims = Claims::new_access(42, "a@b.com");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.exp.is_none());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_claims_expire_in_the_future() {
        let claims = Claims::new_refresh(42, "a@b.com", REFRESH_TOKEN_EXPIRY_DAYS);
        let exp = claims.exp.expect("refresh claims must carry exp");
        assert!(exp > Utc::now().timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_refresh_claims() {
        let mut claims = Claims::new_refresh(1, "a@b.com", 7);
        claims.exp = Some(Utc::now().timestamp() - 1);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let a = Claims::new_access(1, "a@b.com");
        let b = Claims::new_access(1, "a@b.com");
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_access_claims_serialization_omits_exp() {
        let claims = Claims::new_access(7, "a@b.com");
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("\"exp\""));

        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claims);
    }
}
