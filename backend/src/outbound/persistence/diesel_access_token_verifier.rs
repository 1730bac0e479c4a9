//! PostgreSQL-backed `AccessTokenVerifier` resolving tokens via sessions.
//!
//! Tokens are opaque strings issued by the external login flow and stored
//! in the `sessions` table; verification is a single indexed lookup.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserId;
use crate::domain::ports::{AccessTokenError, AccessTokenVerifier};

use super::diesel_error_mapping::{DbFailure, classify_diesel_error, classify_pool_error};
use super::pool::DbPool;
use super::schema::sessions;

/// Diesel-backed implementation of the `AccessTokenVerifier` port.
#[derive(Clone)]
pub struct DieselAccessTokenVerifier {
    pool: DbPool,
}

impl DieselAccessTokenVerifier {
    /// Create a new verifier with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: DbFailure) -> AccessTokenError {
    failure.into_port_error(AccessTokenError::connection, AccessTokenError::query)
}

#[async_trait]
impl AccessTokenVerifier for DieselAccessTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Option<UserId>, AccessTokenError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let user_id: Option<i32> = sessions::table
            .filter(sessions::token.eq(token))
            .select(sessions::user_id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        Ok(user_id.map(UserId::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::pool::PoolError;

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let err = map_failure(classify_pool_error(PoolError::checkout("connection refused")));
        assert!(matches!(err, AccessTokenError::Connection { .. }));
    }

    #[test]
    fn diesel_failures_map_to_query_errors() {
        let err = map_failure(classify_diesel_error(diesel::result::Error::NotFound));
        assert!(matches!(err, AccessTokenError::Query { .. }));
    }
}
