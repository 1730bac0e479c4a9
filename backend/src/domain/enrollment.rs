//! Enrollment aggregate: a user's registration record for the event.
//!
//! Enrollments are created and destroyed by the external registration flow;
//! this service only ever reads them. Presence of an enrollment is the first
//! precondition checked by the eligibility evaluator.

use crate::domain::{AddressId, EnrollmentId, UserId};

/// Postal address attached to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A user's registration for the event, read together with its addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub addresses: Vec<Address>,
}
