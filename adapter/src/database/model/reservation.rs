use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{Reservation, ReservationStatus, ReservedRoom},
    room::RoomType,
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_amount: Decimal,
    pub address: String,
    pub credit_card_number: String,
    pub cc_expiry: String,
    pub status: String,
    pub room_type: String,
    pub room_number: Option<String>,
    pub created_by: UserId,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            first_name,
            last_name,
            email,
            phone_number,
            check_in,
            check_out,
            total_amount,
            address,
            credit_card_number,
            cc_expiry,
            status,
            room_type,
            room_number,
            created_by,
            updated_by,
            created_at,
            updated_at,
        } = value;
        Ok(Reservation {
            reservation_id,
            first_name,
            last_name,
            email,
            phone_number,
            check_in,
            check_out,
            total_amount,
            address,
            credit_card_number,
            cc_expiry,
            status: ReservationStatus::from_str(&status).map_err(|_| {
                AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
            })?,
            room_type: RoomType::from_str(&room_type).map_err(|_| {
                AppError::ConversionEntityError(format!("unknown room_type: {room_type}"))
            })?,
            room_number,
            created_by,
            updated_by,
            created_at,
            updated_at,
        })
    }
}

/// Result row of the conflicting-reservations query: the reservation's view
/// of the room it holds on the queried date.
#[derive(sqlx::FromRow)]
pub struct ReservedRoomRow {
    pub room_number: Option<String>,
    pub room_type: String,
    pub status: String,
}

impl TryFrom<ReservedRoomRow> for ReservedRoom {
    type Error = AppError;

    fn try_from(value: ReservedRoomRow) -> Result<Self, Self::Error> {
        let ReservedRoomRow {
            room_number,
            room_type,
            status,
        } = value;
        Ok(ReservedRoom {
            room_number,
            room_type: RoomType::from_str(&room_type).map_err(|_| {
                AppError::ConversionEntityError(format!("unknown room_type: {room_type}"))
            })?,
            status: ReservationStatus::from_str(&status).map_err(|_| {
                AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_reservation() {
        let row = ReservationRow {
            reservation_id: ReservationId::new(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone_number: "0123456789".into(),
            check_in: "2024-06-01".parse().unwrap(),
            check_out: "2024-06-04".parse().unwrap(),
            total_amount: Decimal::new(45000, 2),
            address: "1 Navy Way".into(),
            credit_card_number: "4242424242424242".into(),
            cc_expiry: "11/26".into(),
            status: "checked_in".into(),
            room_type: "Double".into(),
            room_number: Some("102".into()),
            created_by: UserId::new(),
            updated_by: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        let reservation = Reservation::try_from(row).unwrap();
        assert_eq!(reservation.status, ReservationStatus::CheckedIn);
        assert_eq!(reservation.room_type, RoomType::Double);
        assert_eq!(reservation.stay_days(), 3);
    }

    #[test]
    fn reserved_room_row_keeps_unassigned_room_number() {
        let row = ReservedRoomRow {
            room_number: None,
            room_type: "Single".into(),
            status: "booked".into(),
        };
        let reserved = ReservedRoom::try_from(row).unwrap();
        assert!(reserved.room_number.is_none());
        assert_eq!(reserved.status, ReservationStatus::Booked);
    }
}
