//! Hotel read endpoints.
//!
//! ```text
//! GET /hotels
//! GET /hotels/{hotelId}
//! ```
//!
//! Both endpoints require a bearer token and answer 402 when the caller's
//! ticket does not grant hotel access.

use actix_web::{get, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Hotel, HotelId, HotelWithRooms, Room};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Hotel list entry.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    /// Hotel identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Hotel display name.
    #[schema(example = "Caribe Hotel")]
    pub name: String,
    /// Presentation image URL.
    #[schema(example = "https://example.com/caribe.jpg")]
    pub image: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.get(),
            name: hotel.name,
            image: hotel.image,
        }
    }
}

/// Room entry nested under a hotel.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    /// Room identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Room display name.
    #[schema(example = "Room 101")]
    pub name: String,
    /// Number of guests the room holds.
    #[schema(example = 4)]
    pub capacity: i32,
    /// Identifier of the owning hotel.
    #[schema(example = 1)]
    pub hotel_id: i32,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.get(),
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id.get(),
        }
    }
}

/// Hotel detail payload with nested rooms.
///
/// The `Rooms` key keeps its historical capitalisation; existing clients
/// depend on it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    /// Hotel identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Hotel display name.
    #[schema(example = "Caribe Hotel")]
    pub name: String,
    /// Presentation image URL.
    #[schema(example = "https://example.com/caribe.jpg")]
    pub image: String,
    /// Rooms belonging to the hotel; may be empty.
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(detail: HotelWithRooms) -> Self {
        Self {
            id: detail.hotel.id.get(),
            name: detail.hotel.name,
            image: detail.hotel.image,
            rooms: detail.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

fn parse_hotel_id(raw: &str) -> Result<HotelId, Error> {
    raw.parse::<i32>().map(HotelId::new).map_err(|_| {
        Error::invalid_request("hotelId must be an integer").with_details(json!({
            "field": "hotelId",
            "value": raw,
            "code": "invalid_integer",
        }))
    })
}

/// List all hotels visible to the authenticated user.
#[utoipa::path(
    get,
    path = "/hotels",
    responses(
        (status = 200, description = "Hotels", body = [HotelResponse]),
        (status = 400, description = "Invalid request or collaborator fault", body = ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 402, description = "Ticket does not grant hotel access", body = ErrorSchema),
        (status = 404, description = "No enrollment, ticket, or hotels", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "listHotels"
)]
#[get("/hotels")]
pub async fn list_hotels(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<HotelResponse>>> {
    let hotels = state.hotels.list_hotels(user.user_id).await?;
    Ok(web::Json(hotels.into_iter().map(HotelResponse::from).collect()))
}

/// Fetch one hotel with its rooms.
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    params(
        ("hotelId" = String, Path, description = "Integer hotel identifier")
    ),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelWithRoomsResponse),
        (status = 400, description = "Malformed hotel id or collaborator fault", body = ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorSchema),
        (status = 402, description = "Ticket does not grant hotel access", body = ErrorSchema),
        (status = 404, description = "No enrollment, ticket, or such hotel", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "getHotel"
)]
#[get("/hotels/{hotel_id}")]
pub async fn get_hotel(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<HotelWithRoomsResponse>> {
    let hotel_id = parse_hotel_id(&path.into_inner())?;
    let detail = state.hotels.hotel_with_rooms(user.user_id, hotel_id).await?;
    Ok(web::Json(HotelWithRoomsResponse::from(detail)))
}
