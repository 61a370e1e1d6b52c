use axum::extract::{Path, State};
use axum::Json;
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::hotel::{HotelResponse, HotelWithRoomsResponse};

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    registry
        .eligibility_service()
        .check_hotel_access(user.id())
        .await?;

    registry
        .hotel_repository()
        .find_all()
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

// 資格チェックが先、ホテルの存在確認はその後
pub async fn show_hotel_with_rooms(
    user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    registry
        .eligibility_service()
        .check_hotel_access(user.id())
        .await?;

    registry
        .hotel_repository()
        .find_with_rooms(hotel_id)
        .await
        .and_then(|hotel| match hotel {
            Some(hotel) => Ok(Json(hotel.into())),
            None => Err(AppError::EntityNotFound("hotel not found".into())),
        })
}
