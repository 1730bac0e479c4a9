//! PostgreSQL-backed `EnrollmentRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{Address, AddressId, Enrollment, EnrollmentId, UserId};

use super::diesel_error_mapping::{DbFailure, classify_diesel_error, classify_pool_error};
use super::models::{AddressRow, EnrollmentRow};
use super::pool::DbPool;
use super::schema::{addresses, enrollments};

/// Diesel-backed implementation of the `EnrollmentRepository` port.
#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    pool: DbPool,
}

impl DieselEnrollmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: DbFailure) -> EnrollmentRepositoryError {
    failure.into_port_error(
        EnrollmentRepositoryError::connection,
        EnrollmentRepositoryError::query,
    )
}

fn row_to_address(row: AddressRow) -> Address {
    Address {
        id: AddressId::new(row.id),
        street: row.street,
        city: row.city,
        state: row.state,
        postal_code: row.postal_code,
    }
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let row: Option<EnrollmentRow> = enrollments::table
            .filter(enrollments::user_id.eq(user_id.get()))
            .select(EnrollmentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let address_rows: Vec<AddressRow> = addresses::table
            .filter(addresses::enrollment_id.eq(row.id))
            .order(addresses::id.asc())
            .select(AddressRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        Ok(Some(Enrollment {
            id: EnrollmentId::new(row.id),
            user_id: UserId::new(row.user_id),
            addresses: address_rows.into_iter().map(row_to_address).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::pool::PoolError;

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let err = map_failure(classify_pool_error(PoolError::checkout("connection refused")));
        assert!(matches!(err, EnrollmentRepositoryError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn diesel_failures_map_to_query_errors() {
        let err = map_failure(classify_diesel_error(diesel::result::Error::NotFound));
        assert!(matches!(err, EnrollmentRepositoryError::Query { .. }));
    }

    #[test]
    fn address_rows_convert_to_domain_addresses() {
        let address = row_to_address(AddressRow {
            id: 4,
            street: "101 Conference Way".to_owned(),
            city: "Porto Alegre".to_owned(),
            state: "RS".to_owned(),
            postal_code: "90000-000".to_owned(),
        });
        assert_eq!(address.id, AddressId::new(4));
        assert_eq!(address.city, "Porto Alegre");
    }
}
