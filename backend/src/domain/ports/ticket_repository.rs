//! Port abstraction for ticket lookups.

use async_trait::async_trait;

use crate::domain::{EnrollmentId, Ticket, TicketId, TicketStatus, TicketType, TicketTypeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "ticket repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "ticket repository query failed: {message}",
    }
}

/// Read-only access to tickets and their categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Fetch the ticket bought under an enrollment, including its type.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;
}

/// Deterministic ticket fixture: paid, in-person, hotel included.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketRepository;

impl FixtureTicketRepository {
    /// Enrollment id the fixture ticket belongs to.
    pub const ENROLLMENT_ID: EnrollmentId = EnrollmentId::new(1);
}

#[async_trait]
impl TicketRepository for FixtureTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        if enrollment_id != Self::ENROLLMENT_ID {
            return Ok(None);
        }
        Ok(Some(Ticket {
            id: TicketId::new(1),
            enrollment_id,
            status: TicketStatus::Paid,
            ticket_type: TicketType {
                id: TicketTypeId::new(1),
                name: "In person with hotel".to_owned(),
                price: 60_000,
                is_remote: false,
                includes_hotel: true,
            },
        }))
    }
}
