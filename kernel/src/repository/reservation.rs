use crate::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationStatus, ReservedRoom,
    },
    room::RoomType,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Book a reservation. Requires at least one vacant room of the
    /// requested type to exist at booking time; no specific room is
    /// assigned (`room_number` stays NULL until a later update).
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// Patch one reservation; absent fields keep their stored values.
    async fn update(
        &self,
        reservation_id: ReservationId,
        event: UpdateReservation,
    ) -> AppResult<Reservation>;
    /// Booked reservations whose check-in is the given date.
    async fn find_arrivals(&self, date: NaiveDate) -> AppResult<Vec<Reservation>>;
    /// Reservations whose check-out is the given date, any status.
    async fn find_departures(&self, date: NaiveDate) -> AppResult<Vec<Reservation>>;
    /// Reservations arriving on the given date in the given status.
    async fn find_checkins(
        &self,
        date: NaiveDate,
        status: ReservationStatus,
    ) -> AppResult<Vec<Reservation>>;
    /// In-house listing: all reservations currently in the given status.
    async fn find_by_status(&self, status: ReservationStatus) -> AppResult<Vec<Reservation>>;
    /// Reservations of the given type holding a room on the given date
    /// (`check_in <= date < check_out`, status booked or checked_in),
    /// returned as room-state snapshots.
    async fn find_reserved_rooms(
        &self,
        room_type: RoomType,
        date: NaiveDate,
    ) -> AppResult<Vec<ReservedRoom>>;
}
