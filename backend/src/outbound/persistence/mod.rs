//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! The adapters stay thin: they translate between Diesel rows and domain
//! types and map storage failures to the typed port errors. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) are internal details
//! never exposed to the domain layer.

mod diesel_access_token_verifier;
mod diesel_enrollment_repository;
pub(crate) mod diesel_error_mapping;
mod diesel_hotel_repository;
mod diesel_ticket_repository;
mod models;
mod pool;
mod schema;

pub use diesel_access_token_verifier::DieselAccessTokenVerifier;
pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use diesel_hotel_repository::DieselHotelRepository;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
