//! Driving port for hotel queries made on behalf of an authenticated user.
//!
//! Inbound adapters (HTTP handlers) consume this port so they stay free of
//! eligibility and persistence concerns. Production backs it with
//! [`crate::domain::HotelsService`]; tests substitute mocks or fixtures.

use async_trait::async_trait;

use crate::domain::{Error, Hotel, HotelId, HotelWithRooms, Room, RoomId, UserId};

/// Use-case port for the two hotel read operations.
///
/// Both operations evaluate the caller's access eligibility before touching
/// inventory and surface denials as typed [`Error`]s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsQuery: Send + Sync {
    /// List all hotels visible to the user.
    async fn list_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>, Error>;

    /// Fetch one hotel with its rooms.
    async fn hotel_with_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> Result<HotelWithRooms, Error>;
}

/// Fixture query used until persistence is wired; every user is eligible.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelsQuery;

impl FixtureHotelsQuery {
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
impl HotelsQuery for FixtureHotelsQuery {
    async fn list_hotels(&self, _user_id: UserId) -> Result<Vec<Hotel>, Error> {
        Ok(vec![Self::hotel()])
    }

    async fn hotel_with_rooms(
        &self,
        _user_id: UserId,
        hotel_id: HotelId,
    ) -> Result<HotelWithRooms, Error> {
        if hotel_id != Self::HOTEL_ID {
            return Err(Error::not_found("hotel not found"));
        }
        Ok(HotelWithRooms {
            hotel: Self::hotel(),
            rooms: vec![Room {
                id: RoomId::new(1),
                name: "Room 101".to_owned(),
                capacity: 4,
                hotel_id,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_query_lists_the_fixture_hotel() {
        let query = FixtureHotelsQuery;
        let hotels = query.list_hotels(UserId::new(1)).await.expect("hotel list");
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Caribe Hotel");
    }

    #[tokio::test]
    async fn fixture_query_rejects_unknown_hotel() {
        let query = FixtureHotelsQuery;
        let err = query
            .hotel_with_rooms(UserId::new(1), HotelId::new(2))
            .await
            .expect_err("unknown hotel id");
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
