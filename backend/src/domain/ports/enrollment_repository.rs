//! Port abstraction for enrollment lookups.

use async_trait::async_trait;

use crate::domain::{Address, AddressId, Enrollment, EnrollmentId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "enrollment repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "enrollment repository query failed: {message}",
    }
}

/// Read-only access to enrollment records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fetch a user's enrollment together with its addresses.
    ///
    /// Absence is a normal outcome, never an error.
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError>;
}

/// Deterministic enrollment fixture for fixture-backed servers and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentRepository;

impl FixtureEnrollmentRepository {
    /// User id the fixture enrollment belongs to.
    pub const USER_ID: UserId = UserId::new(1);
    /// Identifier of the fixture enrollment.
    pub const ENROLLMENT_ID: EnrollmentId = EnrollmentId::new(1);
}

#[async_trait]
impl EnrollmentRepository for FixtureEnrollmentRepository {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, EnrollmentRepositoryError> {
        if user_id != Self::USER_ID {
            return Ok(None);
        }
        Ok(Some(Enrollment {
            id: Self::ENROLLMENT_ID,
            user_id,
            addresses: vec![Address {
                id: AddressId::new(1),
                street: "101 Conference Way".to_owned(),
                city: "Porto Alegre".to_owned(),
                state: "RS".to_owned(),
                postal_code: "90000-000".to_owned(),
            }],
        }))
    }
}
