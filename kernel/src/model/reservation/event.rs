use crate::model::{id::UserId, reservation::ReservationStatus, room::RoomType};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub struct CreateReservation {
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
    pub status: ReservationStatus,
    pub room_type: RoomType,
    pub created_by: UserId,
}

/// Partial update: `None` fields keep their stored values.
#[derive(Debug, Default)]
pub struct UpdateReservation {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub total_amount: Option<Decimal>,
    pub address: Option<String>,
    pub credit_card_number: Option<String>,
    pub cc_expiry: Option<String>,
    pub status: Option<ReservationStatus>,
    pub room_type: Option<RoomType>,
    pub room_number: Option<String>,
}
