//! PostgreSQL-backed `TicketRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{EnrollmentId, Ticket, TicketId, TicketStatus, TicketType, TicketTypeId};

use super::diesel_error_mapping::{DbFailure, classify_diesel_error, classify_pool_error};
use super::models::{TicketRow, TicketTypeRow};
use super::pool::DbPool;
use super::schema::{ticket_types, tickets};

/// Diesel-backed implementation of the `TicketRepository` port.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: DbFailure) -> TicketRepositoryError {
    failure.into_port_error(TicketRepositoryError::connection, TicketRepositoryError::query)
}

/// Decode the stored status string.
///
/// Only `RESERVED` blocks hotel access, so unrecognised values fall back to
/// paid with a warning rather than failing the whole request.
fn decode_status(ticket_id: i32, raw: &str) -> TicketStatus {
    match raw {
        "RESERVED" => TicketStatus::Reserved,
        "PAID" => TicketStatus::Paid,
        other => {
            warn!(ticket_id, value = other, "unrecognised ticket status, treating as paid");
            TicketStatus::Paid
        }
    }
}

fn rows_to_ticket(ticket: TicketRow, ticket_type: TicketTypeRow) -> Ticket {
    let status = decode_status(ticket.id, &ticket.status);
    Ticket {
        id: TicketId::new(ticket.id),
        enrollment_id: EnrollmentId::new(ticket.enrollment_id),
        status,
        ticket_type: TicketType {
            id: TicketTypeId::new(ticket_type.id),
            name: ticket_type.name,
            price: ticket_type.price,
            is_remote: ticket_type.is_remote,
            includes_hotel: ticket_type.includes_hotel,
        },
    }
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let result: Option<(TicketRow, TicketTypeRow)> = tickets::table
            .inner_join(ticket_types::table)
            .filter(tickets::enrollment_id.eq(enrollment_id.get()))
            .select((TicketRow::as_select(), TicketTypeRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        Ok(result.map(|(ticket, ticket_type)| rows_to_ticket(ticket, ticket_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::pool::PoolError;
    use rstest::rstest;

    fn ticket_type_row() -> TicketTypeRow {
        TicketTypeRow {
            id: 2,
            name: "In person with hotel".to_owned(),
            price: 60_000,
            is_remote: false,
            includes_hotel: true,
        }
    }

    #[rstest]
    #[case("PAID", TicketStatus::Paid)]
    #[case("RESERVED", TicketStatus::Reserved)]
    #[case("CANCELLED", TicketStatus::Paid)]
    fn status_decoding_tolerates_unknown_values(
        #[case] raw: &str,
        #[case] expected: TicketStatus,
    ) {
        assert_eq!(decode_status(1, raw), expected);
    }

    #[test]
    fn rows_convert_to_domain_ticket() {
        let ticket = rows_to_ticket(
            TicketRow {
                id: 5,
                enrollment_id: 3,
                status: "RESERVED".to_owned(),
            },
            ticket_type_row(),
        );

        assert_eq!(ticket.id, TicketId::new(5));
        assert_eq!(ticket.enrollment_id, EnrollmentId::new(3));
        assert_eq!(ticket.status, TicketStatus::Reserved);
        assert!(ticket.ticket_type.includes_hotel);
    }

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let err = map_failure(classify_pool_error(PoolError::checkout("connection refused")));
        assert!(matches!(err, TicketRepositoryError::Connection { .. }));
    }
}
