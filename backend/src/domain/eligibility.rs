//! Access-eligibility policy for hotel inventory.
//!
//! The evaluator answers one question: may this user view hotel data? The
//! check sequence is fixed, and the order decides which failure a caller
//! observes:
//!
//! 1. no enrollment for the user: denied, not found;
//! 2. no ticket under that enrollment: denied, not found;
//! 3. ticket still reserved, OR event remote, OR hotel not included:
//!    denied, payment required;
//! 4. otherwise allowed.
//!
//! The three payment conditions are an undifferentiated OR to the outside
//! world; [`PaymentBlock`] tags the first matching one purely for
//! diagnostics. The evaluator performs reads only and keeps no state
//! between calls.

use std::sync::Arc;

use crate::domain::ports::{
    EnrollmentRepository, EnrollmentRepositoryError, TicketRepository, TicketRepositoryError,
};
use crate::domain::{Error, Ticket, TicketStatus, UserId};

/// Which payment-side condition blocked access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentBlock {
    /// Ticket status is still `RESERVED`.
    TicketUnpaid,
    /// The ticket type is for remote attendance.
    EventRemote,
    /// The ticket type does not include hotel access.
    HotelExcluded,
}

/// Why access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The user has no enrollment record.
    EnrollmentMissing,
    /// The enrollment has no ticket.
    TicketMissing,
    /// The ticket or its type fails a payment-side condition.
    Payment(PaymentBlock),
}

impl DenialReason {
    /// Map the denial to the error the orchestrator surfaces.
    #[must_use]
    pub fn into_error(self) -> Error {
        match self {
            Self::EnrollmentMissing => Error::not_found("enrollment not found"),
            Self::TicketMissing => Error::not_found("ticket not found"),
            Self::Payment(block) => Error::payment_required(match block {
                PaymentBlock::TicketUnpaid => "ticket has not been paid",
                PaymentBlock::EventRemote => "ticket is for remote attendance",
                PaymentBlock::HotelExcluded => "ticket does not include hotel access",
            }),
        }
    }
}

/// Outcome of an eligibility evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The user may view hotel data.
    Allowed,
    /// The user may not, for the tagged reason.
    Denied(DenialReason),
}

/// First payment-side condition the ticket fails, if any.
#[must_use]
pub fn payment_block(ticket: &Ticket) -> Option<PaymentBlock> {
    if ticket.status == TicketStatus::Reserved {
        Some(PaymentBlock::TicketUnpaid)
    } else if ticket.ticket_type.is_remote {
        Some(PaymentBlock::EventRemote)
    } else if !ticket.ticket_type.includes_hotel {
        Some(PaymentBlock::HotelExcluded)
    } else {
        None
    }
}

/// Evaluates the access policy against the enrollment and ticket stores.
#[derive(Clone)]
pub struct EligibilityEvaluator<E, T> {
    enrollments: Arc<E>,
    tickets: Arc<T>,
}

impl<E, T> EligibilityEvaluator<E, T> {
    /// Create an evaluator over the given lookup collaborators.
    pub fn new(enrollments: Arc<E>, tickets: Arc<T>) -> Self {
        Self {
            enrollments,
            tickets,
        }
    }
}

fn map_enrollment_error(error: EnrollmentRepositoryError) -> Error {
    match error {
        EnrollmentRepositoryError::Connection { message }
        | EnrollmentRepositoryError::Query { message } => Error::generic(message),
    }
}

fn map_ticket_error(error: TicketRepositoryError) -> Error {
    match error {
        TicketRepositoryError::Connection { message }
        | TicketRepositoryError::Query { message } => Error::generic(message),
    }
}

impl<E, T> EligibilityEvaluator<E, T>
where
    E: EnrollmentRepository,
    T: TicketRepository,
{
    /// Evaluate the policy for one user.
    ///
    /// Absent records yield a [`Verdict::Denied`]; only collaborator faults
    /// produce an `Err`, and those surface as the generic failure category,
    /// never as a denial.
    pub async fn evaluate(&self, user_id: UserId) -> Result<Verdict, Error> {
        let Some(enrollment) = self
            .enrollments
            .find_with_address_by_user_id(user_id)
            .await
            .map_err(map_enrollment_error)?
        else {
            return Ok(Verdict::Denied(DenialReason::EnrollmentMissing));
        };

        let Some(ticket) = self
            .tickets
            .find_by_enrollment_id(enrollment.id)
            .await
            .map_err(map_ticket_error)?
        else {
            return Ok(Verdict::Denied(DenialReason::TicketMissing));
        };

        match payment_block(&ticket) {
            Some(block) => Ok(Verdict::Denied(DenialReason::Payment(block))),
            None => Ok(Verdict::Allowed),
        }
    }
}
