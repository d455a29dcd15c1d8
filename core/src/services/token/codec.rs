//! JWT encoding and verification for one token family.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Stateless codec bound to a single signing key and validation policy.
///
/// Two instances exist per process, one per token family. Decoding only
/// accepts HS256: a token presenting any other algorithm (including
/// `none`) fails signature verification rather than being partially
/// trusted.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Codec for access tokens. `exp` is not required; access token expiry
    /// is enforced by the cookie lifetime, not by the claim set.
    pub fn for_access_tokens(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.required_spec_claims.clear();
        Self::with_validation(secret, validation)
    }

    /// Codec for refresh tokens. `exp` is required and enforced.
    pub fn for_refresh_tokens(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);
        Self::with_validation(secret, validation)
    }

    fn with_validation(secret: &str, validation: Validation) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a claim set into a compact token string.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::Malformed)
    }

    /// Verify a token string and recover its claims.
    ///
    /// Checks, in order: parseability, signature algorithm, signature under
    /// this codec's key, and expiry when an `exp` claim is present.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName => {
                    TokenError::InvalidSignature
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(claim) => {
                    TokenError::MissingClaim {
                        claim: claim.clone(),
                    }
                }
                _ => TokenError::Malformed,
            })
    }
}
