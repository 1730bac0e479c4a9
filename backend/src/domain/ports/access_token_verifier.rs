//! Port abstraction for bearer-token resolution.
//!
//! Token issuance lives in an external login flow; this port only answers
//! "which user does this opaque token belong to". Handlers never see raw
//! tokens, only the resolved [`UserId`].

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised while resolving access tokens.
    pub enum AccessTokenError {
        /// Token store connection could not be established.
        Connection { message: String } =>
            "access token store connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } =>
            "access token lookup failed: {message}",
    }
}

/// Resolve an opaque bearer token to the user it authenticates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenVerifier: Send + Sync {
    /// Return the owning user, or `None` when the token is unknown.
    async fn verify(&self, token: &str) -> Result<Option<UserId>, AccessTokenError>;
}

/// Fixture verifier accepting a single well-known token.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccessTokenVerifier;

impl FixtureAccessTokenVerifier {
    /// The only token the fixture accepts.
    pub const TOKEN: &'static str = "fixture-access-token";
    /// User the fixture token authenticates.
    pub const USER_ID: UserId = UserId::new(1);
}

#[async_trait]
impl AccessTokenVerifier for FixtureAccessTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Option<UserId>, AccessTokenError> {
        if token == Self::TOKEN {
            Ok(Some(Self::USER_ID))
        } else {
            Ok(None)
        }
    }
}
