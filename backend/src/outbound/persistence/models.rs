//! Diesel queryable rows used by the read adapters.
//!
//! Rows select only the columns the domain needs; audit timestamps stay in
//! the database.

use diesel::prelude::*;

use crate::outbound::persistence::schema::{
    addresses, enrollments, hotels, rooms, ticket_types, tickets,
};

/// Queryable row for enrollments.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EnrollmentRow {
    pub id: i32,
    pub user_id: i32,
}

/// Queryable row for enrollment addresses.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AddressRow {
    pub id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Queryable row for tickets.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketRow {
    pub id: i32,
    pub enrollment_id: i32,
    pub status: String,
}

/// Queryable row for ticket types.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ticket_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketTypeRow {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Queryable row for hotels.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub id: i32,
    pub name: String,
    pub image: String,
}

/// Queryable row for rooms.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
}
