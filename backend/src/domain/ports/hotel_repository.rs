//! Port abstraction for hotel inventory lookups.

use async_trait::async_trait;

use crate::domain::{Hotel, HotelId, HotelWithRooms, Room, RoomId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by hotel repository adapters.
    pub enum HotelRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "hotel repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "hotel repository query failed: {message}",
    }
}

/// Read-only access to hotels and their rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List every hotel, without room details.
    async fn find_all(&self) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Fetch one hotel together with its rooms.
    async fn find_by_id(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError>;
}

/// Deterministic single-hotel fixture.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelRepository;

impl FixtureHotelRepository {
    /// Identifier of the fixture hotel.
    pub const HOTEL_ID: HotelId = HotelId::new(1);

    fn hotel() -> Hotel {
        Hotel {
            id: Self::HOTEL_ID,
            name: "Caribe Hotel".to_owned(),
            image: "https://example.com/caribe.jpg".to_owned(),
        }
    }
}

#[async_trait]
impl HotelRepository for FixtureHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        Ok(vec![Self::hotel()])
    }

    async fn find_by_id(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        if hotel_id != Self::HOTEL_ID {
            return Ok(None);
        }
        Ok(Some(HotelWithRooms {
            hotel: Self::hotel(),
            rooms: vec![Room {
                id: RoomId::new(1),
                name: "Room 101".to_owned(),
                capacity: 4,
                hotel_id,
            }],
        }))
    }
}
