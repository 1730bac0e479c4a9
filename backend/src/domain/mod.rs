//! Domain primitives, aggregates, and the access-eligibility core.
//!
//! Purpose: define the strongly typed entities, the eligibility evaluator,
//! and the hotel query orchestration, all behind injectable ports so the
//! policy can be exercised without a live data store.

pub mod eligibility;
pub mod enrollment;
pub mod error;
pub mod hotel;
pub mod hotels_service;
mod ids;
pub mod ports;
pub mod ticket;

pub use self::eligibility::{DenialReason, EligibilityEvaluator, PaymentBlock, Verdict};
pub use self::enrollment::{Address, Enrollment};
pub use self::error::{Error, ErrorCode};
pub use self::hotel::{Hotel, HotelWithRooms, Room};
pub use self::hotels_service::HotelsService;
pub use self::ids::{AddressId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
pub use self::ticket::{Ticket, TicketStatus, TicketType};

/// Convenient result alias for operations that fail with [`Error`].
pub type ApiResult<T> = Result<T, Error>;
