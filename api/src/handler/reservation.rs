use crate::model::reservation::{
    ArrivalsResponse, CheckinsQuery, CheckinsResponse, CreateReservationRequest, DateQuery,
    DeparturesResponse, ReservationResponse, ReservationStatusName, UpdateReservationRequest,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::ReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;
    req.validate_date_range()?;

    let reservation_id = registry
        .reservation_repository()
        .create(req.into())
        .await?;

    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(r) => Ok((StatusCode::CREATED, Json(r.into()))),
            None => Err(AppError::EntityNotFound(format!(
                "Reservation {reservation_id} not found"
            ))),
        })
}

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(r) => Ok(Json(r.into())),
            None => Err(AppError::EntityNotFound(format!(
                "Reservation {reservation_id} not found"
            ))),
        })
}

pub async fn update_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    req.validate(&())?;
    req.validate_date_range()?;

    registry
        .reservation_repository()
        .update(reservation_id, req.into())
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

/// Booked reservations arriving on the given date, with stay length.
pub async fn show_arrivals(
    Query(query): Query<DateQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ArrivalsResponse>> {
    registry
        .reservation_repository()
        .find_arrivals(query.date)
        .await
        .map(ArrivalsResponse::from)
        .map(Json)
}

pub async fn show_departures(
    Query(query): Query<DateQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DeparturesResponse>> {
    registry
        .reservation_repository()
        .find_departures(query.date)
        .await
        .map(DeparturesResponse::from)
        .map(Json)
}

pub async fn show_checkins(
    Query(query): Query<CheckinsQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckinsResponse>> {
    registry
        .reservation_repository()
        .find_checkins(query.date, query.status.into())
        .await
        .map(CheckinsResponse::from)
        .map(Json)
}

/// In-house listing: reservations currently in the given status, with stay
/// length.
pub async fn show_inhouse(
    Path(status): Path<ReservationStatusName>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ArrivalsResponse>> {
    registry
        .reservation_repository()
        .find_by_status(status.into())
        .await
        .map(ArrivalsResponse::from)
        .map(Json)
}
