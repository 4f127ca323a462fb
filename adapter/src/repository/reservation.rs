use crate::database::{
    model::reservation::{ReservationRow, ReservedRoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::ReservationId,
        reservation::{
            event::{CreateReservation, UpdateReservation},
            Reservation, ReservationStatus, ReservedRoom,
        },
        room::RoomType,
    },
    repository::reservation::ReservationRepository,
};
use shared::error::{AppError, AppResult};
use sqlx::types::chrono::NaiveDate;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // The vacancy check and the insert run in one SERIALIZABLE
        // transaction so two bookings cannot both take the last vacant
        // room of a type.
        self.set_transaction_serializable(&mut tx).await?;

        {
            let vacant = sqlx::query(
                r#"
                    SELECT room_number
                    FROM rooms
                    WHERE room_type = $1 AND status = 'vacant'
                    LIMIT 1
                "#,
            )
            .bind(event.room_type.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if vacant.is_none() {
                return Err(AppError::NoAvailability(format!(
                    "No available rooms of the requested type: {}",
                    event.room_type
                )));
            }
        }

        // No specific room is taken here; walk-ins are pooled by type and
        // room_number is assigned via a later update.
        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                    (reservation_id, first_name, last_name, email, phone_number,
                     check_in, check_out, total_amount, address,
                     credit_card_number, cc_expiry, status, room_type,
                     room_number, created_by)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                        NULL, $14)
            "#,
        )
        .bind(reservation_id)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&event.phone_number)
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(event.total_amount)
        .bind(&event.address)
        .bind(&event.credit_card_number)
        .bind(&event.cc_expiry)
        .bind(event.status.to_string())
        .bind(event.room_type.to_string())
        .bind(event.created_by)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    reservation_id, first_name, last_name, email, phone_number,
                    check_in, check_out, total_amount, address,
                    credit_card_number, cc_expiry, status, room_type,
                    room_number, created_by, updated_by, created_at, updated_at
                FROM reservations
                WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn update(
        &self,
        reservation_id: ReservationId,
        event: UpdateReservation,
    ) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
                UPDATE reservations
                SET first_name         = COALESCE($2, first_name),
                    last_name          = COALESCE($3, last_name),
                    email              = COALESCE($4, email),
                    phone_number       = COALESCE($5, phone_number),
                    check_in           = COALESCE($6, check_in),
                    check_out          = COALESCE($7, check_out),
                    total_amount       = COALESCE($8, total_amount),
                    address            = COALESCE($9, address),
                    credit_card_number = COALESCE($10, credit_card_number),
                    cc_expiry          = COALESCE($11, cc_expiry),
                    status             = COALESCE($12, status),
                    room_type          = COALESCE($13, room_type),
                    room_number        = COALESCE($14, room_number),
                    updated_at         = now()
                WHERE reservation_id = $1
                RETURNING
                    reservation_id, first_name, last_name, email, phone_number,
                    check_in, check_out, total_amount, address,
                    credit_card_number, cc_expiry, status, room_type,
                    room_number, created_by, updated_by, created_at, updated_at
            "#,
        )
        .bind(reservation_id)
        .bind(event.first_name)
        .bind(event.last_name)
        .bind(event.email)
        .bind(event.phone_number)
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(event.total_amount)
        .bind(event.address)
        .bind(event.credit_card_number)
        .bind(event.cc_expiry)
        .bind(event.status.map(|v| v.to_string()))
        .bind(event.room_type.map(|v| v.to_string()))
        .bind(event.room_number)
        .fetch_optional(self.db.inner_ref())
        .await
        // A patch that inverts the range against the stored dates trips the
        // check constraint; that is client input, not a server fault.
        .map_err(|e| match e.as_database_error() {
            Some(de) if de.is_check_violation() => {
                AppError::UnprocessableEntity("check_out must be after check_in".into())
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AppError::EntityNotFound(format!(
                "Reservation {reservation_id} not found"
            ))),
        }
    }

    async fn find_arrivals(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    reservation_id, first_name, last_name, email, phone_number,
                    check_in, check_out, total_amount, address,
                    credit_card_number, cc_expiry, status, room_type,
                    room_number, created_by, updated_by, created_at, updated_at
                FROM reservations
                WHERE check_in = $1 AND status = 'booked'
                ORDER BY created_at ASC
            "#,
        )
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_departures(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    reservation_id, first_name, last_name, email, phone_number,
                    check_in, check_out, total_amount, address,
                    credit_card_number, cc_expiry, status, room_type,
                    room_number, created_by, updated_by, created_at, updated_at
                FROM reservations
                WHERE check_out = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_checkins(
        &self,
        date: NaiveDate,
        status: ReservationStatus,
    ) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    reservation_id, first_name, last_name, email, phone_number,
                    check_in, check_out, total_amount, address,
                    credit_card_number, cc_expiry, status, room_type,
                    room_number, created_by, updated_by, created_at, updated_at
                FROM reservations
                WHERE check_in = $1 AND status = $2
                ORDER BY created_at ASC
            "#,
        )
        .bind(date)
        .bind(status.to_string())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_status(&self, status: ReservationStatus) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                    reservation_id, first_name, last_name, email, phone_number,
                    check_in, check_out, total_amount, address,
                    credit_card_number, cc_expiry, status, room_type,
                    room_number, created_by, updated_by, created_at, updated_at
                FROM reservations
                WHERE status = $1
                ORDER BY check_in ASC
            "#,
        )
        .bind(status.to_string())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_reserved_rooms(
        &self,
        room_type: RoomType,
        date: NaiveDate,
    ) -> AppResult<Vec<ReservedRoom>> {
        // Half-open occupancy: a reservation holds its room on check-in day
        // but not on check-out day.
        let rows = sqlx::query_as::<_, ReservedRoomRow>(
            r#"
                SELECT room_number, room_type, status
                FROM reservations
                WHERE room_type = $1
                  AND status IN ('booked', 'checked_in')
                  AND check_in <= $2
                  AND check_out > $2
            "#,
        )
        .bind(room_type.to_string())
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ReservedRoom::try_from).collect()
    }
}

impl ReservationRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
