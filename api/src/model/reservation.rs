use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationStatus,
    },
    room::RoomType,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use crate::model::room::RoomTypeName;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatusName {
    Booked,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl From<ReservationStatus> for ReservationStatusName {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Booked => Self::Booked,
            ReservationStatus::CheckedIn => Self::CheckedIn,
            ReservationStatus::CheckedOut => Self::CheckedOut,
            ReservationStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<ReservationStatusName> for ReservationStatus {
    fn from(value: ReservationStatusName) -> Self {
        match value {
            ReservationStatusName::Booked => Self::Booked,
            ReservationStatusName::CheckedIn => Self::CheckedIn,
            ReservationStatusName::CheckedOut => Self::CheckedOut,
            ReservationStatusName::Cancelled => Self::Cancelled,
        }
    }
}

fn digits_only(value: &str, _ctx: &()) -> garde::Result {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(garde::Error::new(
            "credit_card_number must contain only digits",
        ))
    }
}

fn positive_amount(value: &Decimal, _ctx: &()) -> garde::Result {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(garde::Error::new("total_amount must be greater than zero"))
    }
}

fn default_status() -> ReservationStatusName {
    ReservationStatusName::Booked
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(length(min = 1, max = 50))]
    pub first_name: String,
    #[garde(length(min = 1, max = 50))]
    pub last_name: String,
    #[garde(email, length(max = 100))]
    pub email: String,
    #[garde(length(min = 1, max = 15))]
    pub phone_number: String,
    #[garde(skip)]
    pub check_in: NaiveDate,
    #[garde(skip)]
    pub check_out: NaiveDate,
    #[garde(custom(positive_amount))]
    pub total_amount: Decimal,
    #[garde(length(min = 1, max = 200))]
    pub address: String,
    #[garde(length(min = 1, max = 20), custom(digits_only))]
    pub credit_card_number: String,
    /// MM/YY
    #[garde(length(min = 1, max = 5))]
    pub cc_expiry: String,
    #[garde(skip)]
    #[serde(default = "default_status")]
    pub status: ReservationStatusName,
    #[garde(skip)]
    pub room_type: RoomTypeName,
    #[garde(skip)]
    pub created_by: UserId,
}

impl CreateReservationRequest {
    /// Occupancy is the half-open range `[check_in, check_out)`, so a
    /// zero-night stay is invalid.
    pub fn validate_date_range(&self) -> AppResult<()> {
        if self.check_out <= self.check_in {
            return Err(AppError::UnprocessableEntity(
                "check_out must be after check_in".into(),
            ));
        }
        Ok(())
    }
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
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
            created_by,
        } = value;
        Self {
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
            status: status.into(),
            room_type: room_type.into(),
            created_by,
        }
    }
}

/// Partial update: absent fields keep their stored values.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[garde(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[garde(email, length(max = 100))]
    pub email: Option<String>,
    #[garde(length(min = 1, max = 15))]
    pub phone_number: Option<String>,
    #[garde(skip)]
    pub check_in: Option<NaiveDate>,
    #[garde(skip)]
    pub check_out: Option<NaiveDate>,
    #[garde(inner(custom(positive_amount)))]
    pub total_amount: Option<Decimal>,
    #[garde(length(min = 1, max = 200))]
    pub address: Option<String>,
    #[garde(length(min = 1, max = 20), inner(custom(digits_only)))]
    pub credit_card_number: Option<String>,
    #[garde(length(min = 1, max = 5))]
    pub cc_expiry: Option<String>,
    #[garde(skip)]
    pub status: Option<ReservationStatusName>,
    #[garde(skip)]
    pub room_type: Option<RoomTypeName>,
    #[garde(skip)]
    pub room_number: Option<String>,
}

impl UpdateReservationRequest {
    /// Applies only when the patch carries both dates. A single-date patch
    /// is checked against the stored row by the database.
    pub fn validate_date_range(&self) -> AppResult<()> {
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                return Err(AppError::UnprocessableEntity(
                    "check_out must be after check_in".into(),
                ));
            }
        }
        Ok(())
    }
}

impl From<UpdateReservationRequest> for UpdateReservation {
    fn from(value: UpdateReservationRequest) -> Self {
        let UpdateReservationRequest {
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
        } = value;
        Self {
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
            status: status.map(ReservationStatus::from),
            room_type: room_type.map(RoomType::from),
            room_number,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
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
    pub status: ReservationStatusName,
    pub room_type: RoomTypeName,
    pub room_number: Option<String>,
    pub created_by: UserId,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
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
        Self {
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
            status: status.into(),
            room_type: room_type.into(),
            room_number,
            created_by,
            updated_by,
            created_at,
            updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalsResponse {
    pub items: Vec<ArrivalResponse>,
}

impl From<Vec<Reservation>> for ArrivalsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ArrivalResponse::from).collect(),
        }
    }
}

/// Arrival/in-house listing entry, annotated with the stay length in days.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalResponse {
    pub reservation_id: ReservationId,
    pub first_name: String,
    pub last_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_number: Option<String>,
    pub room_type: RoomTypeName,
    pub days: i64,
}

impl From<Reservation> for ArrivalResponse {
    fn from(value: Reservation) -> Self {
        let days = value.stay_days();
        let Reservation {
            reservation_id,
            first_name,
            last_name,
            check_in,
            check_out,
            room_number,
            room_type,
            ..
        } = value;
        Self {
            reservation_id,
            first_name,
            last_name,
            check_in,
            check_out,
            room_number,
            room_type: room_type.into(),
            days,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinsResponse {
    pub items: Vec<CheckinResponse>,
}

impl From<Vec<Reservation>> for CheckinsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(CheckinResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinResponse {
    pub reservation_id: ReservationId,
    pub first_name: String,
    pub last_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl From<Reservation> for CheckinResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            first_name,
            last_name,
            check_in,
            check_out,
            ..
        } = value;
        Self {
            reservation_id,
            first_name,
            last_name,
            check_in,
            check_out,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeparturesResponse {
    pub items: Vec<DepartureResponse>,
}

impl From<Vec<Reservation>> for DeparturesResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(DepartureResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureResponse {
    pub reservation_id: ReservationId,
    pub first_name: String,
    pub last_name: String,
    pub room_number: Option<String>,
    pub room_type: RoomTypeName,
}

impl From<Reservation> for DepartureResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            first_name,
            last_name,
            room_number,
            room_type,
            ..
        } = value;
        Self {
            reservation_id,
            first_name,
            last_name,
            room_number,
            room_type: room_type.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateQuery {
    pub date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinsQuery {
    pub date: NaiveDate,
    pub status: ReservationStatusName,
}
