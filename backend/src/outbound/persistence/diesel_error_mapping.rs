//! Shared classification of pool and Diesel failures.
//!
//! Every adapter maps storage failures into its own port error enum; the
//! connection-versus-query split is identical across them, so the
//! classification lives here.

use tracing::debug;

use super::pool::PoolError;

/// Storage failure reduced to the two categories the ports distinguish.
pub(crate) enum DbFailure {
    /// The database could not be reached or the connection dropped.
    Connection(String),
    /// The query itself failed.
    Query(String),
}

impl DbFailure {
    /// Convert into a port error via the two uniform constructors.
    pub(crate) fn into_port_error<E>(
        self,
        connection: impl FnOnce(String) -> E,
        query: impl FnOnce(String) -> E,
    ) -> E {
        match self {
            Self::Connection(message) => connection(message),
            Self::Query(message) => query(message),
        }
    }
}

/// Classify a pool checkout/build failure.
pub(crate) fn classify_pool_error(error: PoolError) -> DbFailure {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DbFailure::Connection(message)
        }
    }
}

/// Classify a Diesel execution failure.
///
/// Messages are deliberately generic; the original error is logged at debug
/// level and must not reach clients.
pub(crate) fn classify_diesel_error(error: diesel::result::Error) -> DbFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DbFailure::Connection("database connection error".to_owned())
        }
        DieselError::NotFound => DbFailure::Query("record not found".to_owned()),
        _ => DbFailure::Query("database error".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_classify_as_connection_failures() {
        let failure = classify_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(failure, DbFailure::Connection(message) if message.contains("refused")));
    }

    #[test]
    fn diesel_not_found_classifies_as_query_failure() {
        let failure = classify_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(failure, DbFailure::Query(message) if message == "record not found"));
    }
}
