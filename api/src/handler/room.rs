use crate::model::room::{
    AvailabilityQuery, BulkUpdateRoomsRequest, CreateRoomRequest, ReservedRoomsResponse,
    RoomResponse, RoomTypeName, RoomsResponse, UpdateRoomRequest, UpdateRoomRequestWithRoomNumber,
    VacantRoomsQuery,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    Path(room_number): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_room_number(&room_number)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound(format!(
                "Room {room_number} not found"
            ))),
        })
}

/// Physical vacancy query: rooms whose stored status is `vacant`,
/// optionally narrowed to a room type.
pub async fn show_vacant_rooms(
    Query(query): Query<VacantRoomsQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_vacant(query.room_type.map(Into::into))
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

/// Reservations of the given type holding a room on the given date. This is
/// the reserved set, not the free set; vacancy lives at `/rooms/vacant`.
pub async fn show_reserved_rooms(
    Path(room_type): Path<RoomTypeName>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservedRoomsResponse>> {
    registry
        .reservation_repository()
        .find_reserved_rooms(room_type.into(), query.date)
        .await
        .map(ReservedRoomsResponse::from)
        .map(Json)
}

pub async fn update_room(
    Path(room_number): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<Json<RoomResponse>> {
    let update_room = UpdateRoomRequestWithRoomNumber::new(room_number, req);
    registry
        .room_repository()
        .update(update_room.into())
        .await
        .map(RoomResponse::from)
        .map(Json)
}

/// Housekeeping bulk patch: one shared set of fields applied to every room
/// in the list, all-or-nothing.
pub async fn bulk_update_rooms(
    State(registry): State<AppRegistry>,
    Json(req): Json<BulkUpdateRoomsRequest>,
) -> AppResult<Json<RoomsResponse>> {
    req.validate(&())?;

    registry
        .room_repository()
        .bulk_update(req.into())
        .await
        .map(RoomsResponse::from)
        .map(Json)
}
