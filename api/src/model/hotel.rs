use chrono::{DateTime, Utc};
use kernel::model::hotel::{Hotel, HotelWithRooms, Room};
use kernel::model::id::{HotelId, RoomId};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        let Hotel {
            id,
            name,
            image,
            created_at,
            updated_at,
        } = hotel;
        Self {
            id,
            name,
            image,
            created_at,
            updated_at,
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}
