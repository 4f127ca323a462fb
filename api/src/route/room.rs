use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::room::{
    bulk_update_rooms, register_room, show_reserved_rooms, show_room, show_room_list,
    show_vacant_rooms, update_room,
};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", get(show_room_list).post(register_room).put(bulk_update_rooms))
        .route("/vacant", get(show_vacant_rooms))
        .route("/availability/:room_type", get(show_reserved_rooms))
        .route("/:room_number", get(show_room))
        .route("/:room_number", put(update_room));

    Router::new().nest("/rooms", room_routers)
}
