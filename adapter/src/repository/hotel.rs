use async_trait::async_trait;
use derive_new::new;
use kernel::model::hotel::{Hotel, HotelWithRooms, Room};
use kernel::model::id::HotelId;
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::hotel::{HotelRow, RoomRow};
use crate::database::ConnectionPool;

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
                SELECT
                    id,
                    name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        let row: Option<HotelRow> = sqlx::query_as(
            r#"
                SELECT
                    id,
                    name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
                WHERE id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        let Some(hotel) = row else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    id,
                    name,
                    capacity,
                    hotel_id,
                    created_at,
                    updated_at
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
