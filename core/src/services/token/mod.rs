//! Token issuance and verification.
//!
//! The module splits into the stateless [`codec::TokenCodec`] (signing and
//! verification of one token family) and the [`service::TokenService`]
//! which owns both codecs plus the revocation policy for refresh tokens.

pub mod codec;
pub mod config;
pub mod service;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::TokenService;
