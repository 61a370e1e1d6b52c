use axum::routing::get;
use axum::Router;
use registry::AppRegistry;

use crate::handler::hotel::{show_hotel_list, show_hotel_with_rooms};

pub fn build_hotel_routers() -> Router<AppRegistry> {
    let hotels_routers = Router::new()
        .route("/", get(show_hotel_list))
        .route("/:hotel_id", get(show_hotel_with_rooms));

    Router::new().nest("/hotels", hotels_routers)
}
