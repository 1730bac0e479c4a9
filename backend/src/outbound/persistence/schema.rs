//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; they drive Diesel's
//! compile-time query validation. Regenerate with `diesel print-schema`
//! when migrations change.

diesel::table! {
    /// Event enrollments, one per registered user.
    enrollments (id) {
        /// Primary key.
        id -> Int4,
        /// Owning user.
        user_id -> Int4,
        /// Attendee name as registered.
        name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Postal addresses attached to enrollments.
    addresses (id) {
        /// Primary key.
        id -> Int4,
        /// Owning enrollment.
        enrollment_id -> Int4,
        street -> Varchar,
        city -> Varchar,
        state -> Varchar,
        postal_code -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ticket categories with their entitlement flags.
    ticket_types (id) {
        /// Primary key.
        id -> Int4,
        name -> Varchar,
        /// Price in the event's minor currency unit.
        price -> Int4,
        is_remote -> Bool,
        includes_hotel -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Purchased tickets, one per enrollment.
    tickets (id) {
        /// Primary key.
        id -> Int4,
        /// Category the ticket was bought under.
        ticket_type_id -> Int4,
        /// Owning enrollment.
        enrollment_id -> Int4,
        /// Payment status, e.g. `PAID` or `RESERVED`.
        status -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Hotels offered to in-person attendees.
    hotels (id) {
        /// Primary key.
        id -> Int4,
        name -> Varchar,
        /// Presentation image URL.
        image -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Rooms belonging to hotels.
    rooms (id) {
        /// Primary key.
        id -> Int4,
        name -> Varchar,
        capacity -> Int4,
        /// Owning hotel.
        hotel_id -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Login sessions binding opaque access tokens to users.
    sessions (id) {
        /// Primary key.
        id -> Int4,
        /// Authenticated user.
        user_id -> Int4,
        /// Opaque bearer token presented by clients.
        token -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(addresses -> enrollments (enrollment_id));
diesel::joinable!(tickets -> enrollments (enrollment_id));
diesel::joinable!(tickets -> ticket_types (ticket_type_id));
diesel::joinable!(rooms -> hotels (hotel_id));

diesel::allow_tables_to_appear_in_same_query!(
    addresses,
    enrollments,
    hotels,
    rooms,
    sessions,
    ticket_types,
    tickets,
);
