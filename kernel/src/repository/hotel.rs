use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::hotel::{Hotel, HotelWithRooms};
use crate::model::id::HotelId;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    // すべてのホテルを取得する
    async fn find_all(&self) -> AppResult<Vec<Hotel>>;
    // ホテル ID に紐づくホテルと客室一覧を取得する
    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>>;
}
