//! PostgreSQL-backed `HotelRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Hotel, HotelId, HotelWithRooms, Room, RoomId};

use super::diesel_error_mapping::{DbFailure, classify_diesel_error, classify_pool_error};
use super::models::{HotelRow, RoomRow};
use super::pool::DbPool;
use super::schema::{hotels, rooms};

/// Diesel-backed implementation of the `HotelRepository` port.
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: DbFailure) -> HotelRepositoryError {
    failure.into_port_error(HotelRepositoryError::connection, HotelRepositoryError::query)
}

fn row_to_hotel(row: HotelRow) -> Hotel {
    Hotel {
        id: HotelId::new(row.id),
        name: row.name,
        image: row.image,
    }
}

fn row_to_room(row: RoomRow) -> Room {
    Room {
        id: RoomId::new(row.id),
        name: row.name,
        capacity: row.capacity,
        hotel_id: HotelId::new(row.hotel_id),
    }
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let hotel_rows: Vec<HotelRow> = hotels::table
            .order(hotels::id.asc())
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        Ok(hotel_rows.into_iter().map(row_to_hotel).collect())
    }

    async fn find_by_id(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, HotelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_failure(classify_pool_error(err)))?;

        let hotel_row: Option<HotelRow> = hotels::table
            .find(hotel_id.get())
            .select(HotelRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        let Some(hotel_row) = hotel_row else {
            return Ok(None);
        };

        let room_rows: Vec<RoomRow> = rooms::table
            .filter(rooms::hotel_id.eq(hotel_id.get()))
            .order(rooms::id.asc())
            .select(RoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_failure(classify_diesel_error(err)))?;

        Ok(Some(HotelWithRooms {
            hotel: row_to_hotel(hotel_row),
            rooms: room_rows.into_iter().map(row_to_room).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::pool::PoolError;

    #[test]
    fn hotel_rows_convert_to_domain_hotels() {
        let hotel = row_to_hotel(HotelRow {
            id: 8,
            name: "Caribe Hotel".to_owned(),
            image: "https://example.com/caribe.jpg".to_owned(),
        });
        assert_eq!(hotel.id, HotelId::new(8));
        assert_eq!(hotel.name, "Caribe Hotel");
    }

    #[test]
    fn room_rows_keep_their_hotel_reference() {
        let room = row_to_room(RoomRow {
            id: 2,
            name: "Room 101".to_owned(),
            capacity: 4,
            hotel_id: 8,
        });
        assert_eq!(room.hotel_id, HotelId::new(8));
        assert_eq!(room.capacity, 4);
    }

    #[test]
    fn pool_failures_map_to_connection_errors() {
        let err = map_failure(classify_pool_error(PoolError::checkout("connection refused")));
        assert!(matches!(err, HotelRepositoryError::Connection { .. }));
    }

    #[test]
    fn diesel_failures_map_to_query_errors() {
        let err = map_failure(classify_diesel_error(diesel::result::Error::NotFound));
        assert!(matches!(err, HotelRepositoryError::Query { .. }));
    }
}
