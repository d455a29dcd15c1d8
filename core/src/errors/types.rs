//! Error type definitions for authentication and token management.
//!
//! The variants form the complete failure taxonomy of the session core:
//! a presented token is either unparseable, forged, expired, or revoked,
//! and a credential pair either matches a live user or it does not.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Collapsed into one variant so the
    /// API never reveals which half of the pair was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The email recovered from a verified token no longer maps to a user
    #[error("No user found for token identity")]
    IdentityNotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Password hashing failed")]
    HashingFailed,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// The token string cannot be parsed into the expected structure
    #[error("Malformed token")]
    Malformed,

    /// Signature check failed or the token was signed with an unexpected
    /// algorithm
    #[error("Token signature verification failed")]
    InvalidSignature,

    /// The token carries an `exp` claim that is in the past
    #[error("Token expired")]
    Expired,

    /// The token string is present in the revocation store
    #[error("Token revoked")]
    Revoked,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::Expired.to_string(), "Token expired");
        assert_eq!(TokenError::Revoked.to_string(), "Token revoked");
        let err = TokenError::MissingClaim {
            claim: "exp".to_string(),
        };
        assert!(err.to_string().contains("exp"));
    }

    #[test]
    fn test_auth_error_does_not_leak_credentials() {
        let message = AuthError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("email not found"));
        assert!(!message.to_lowercase().contains("wrong password"));
    }
}
