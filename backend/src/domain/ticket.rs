//! Ticket aggregate: a purchase record tied to an enrollment and a category.

use crate::domain::{EnrollmentId, TicketId, TicketTypeId};

/// Payment state of a ticket.
///
/// Storage may hold further states over time; only `RESERVED` blocks hotel
/// access, so everything else is read as [`TicketStatus::Paid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    /// Payment completed.
    Paid,
    /// Reserved but not yet paid for.
    Reserved,
}

/// Category of ticket defining remote/in-person and hotel entitlements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in the event's minor currency unit; not consulted by the
    /// eligibility policy.
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// A purchased ticket, always read together with its [`TicketType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}
