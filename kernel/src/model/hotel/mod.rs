use chrono::{DateTime, Utc};

use crate::model::id::{HotelId, RoomId};

#[derive(Debug, Clone)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
