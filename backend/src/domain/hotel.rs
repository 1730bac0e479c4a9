//! Hotel inventory entities.

use crate::domain::{HotelId, RoomId};

/// A hotel offered to in-person attendees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// URL of the hotel's presentation image.
    pub image: String,
}

/// A room belonging to a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

/// A hotel together with its rooms, as served by the detail endpoint.
///
/// A hotel with no rooms is a valid value; the rooms vector is simply empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
