use crate::model::{
    id::{ReservationId, UserId},
    room::RoomType,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use strum::{Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ReservationStatus {
    Booked,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Whether a reservation in this status holds a room for its date range.
    pub fn holds_room(self) -> bool {
        matches!(self, Self::Booked | Self::CheckedIn)
    }
}

/// A guest reservation. `room_number` stays `None` at booking time;
/// walk-ins are pooled by room type and assigned a room later.
#[derive(Debug, Clone)]
pub struct Reservation {
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
    pub status: ReservationStatus,
    pub room_type: RoomType,
    pub room_number: Option<String>,
    pub created_by: UserId,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Length of stay in whole days. Occupancy is the half-open range
    /// `[check_in, check_out)`, so a one-night stay counts as one day.
    pub fn stay_days(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether this reservation occupies its room type on the given date.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.status.holds_room() && self.check_in <= date && date < self.check_out
    }
}

/// Snapshot of a reservation that conflicts with an availability query,
/// keyed by the room it holds (if one has been assigned yet).
#[derive(Debug, Clone)]
pub struct ReservedRoom {
    pub room_number: Option<String>,
    pub room_type: RoomType,
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{ReservationId, UserId};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn reservation(check_in: &str, check_out: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: "0123456789".into(),
            check_in: check_in.parse().unwrap(),
            check_out: check_out.parse().unwrap(),
            total_amount: Decimal::new(25000, 2),
            address: "12 Analytical St".into(),
            credit_card_number: "4111111111111111".into(),
            cc_expiry: "12/27".into(),
            status,
            room_type: RoomType::Single,
            room_number: None,
            created_by: UserId::new(),
            updated_by: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[rstest]
    #[case("2024-06-01", "2024-06-02", 1)]
    #[case("2024-06-01", "2024-06-08", 7)]
    #[case("2024-12-30", "2025-01-02", 3)]
    fn stay_days_counts_nights(#[case] check_in: &str, #[case] check_out: &str, #[case] days: i64) {
        let r = reservation(check_in, check_out, ReservationStatus::Booked);
        assert_eq!(r.stay_days(), days);
    }

    #[rstest]
    // check-in day is occupied, check-out day is not (half-open range)
    #[case("2024-06-01", true)]
    #[case("2024-06-02", true)]
    #[case("2024-06-03", false)]
    #[case("2024-05-31", false)]
    fn occupancy_is_half_open(#[case] date: &str, #[case] expected: bool) {
        let r = reservation("2024-06-01", "2024-06-03", ReservationStatus::Booked);
        assert_eq!(r.occupies(date.parse().unwrap()), expected);
    }

    #[rstest]
    #[case(ReservationStatus::Booked, true)]
    #[case(ReservationStatus::CheckedIn, true)]
    #[case(ReservationStatus::CheckedOut, false)]
    #[case(ReservationStatus::Cancelled, false)]
    fn only_booked_and_checked_in_hold_rooms(
        #[case] status: ReservationStatus,
        #[case] expected: bool,
    ) {
        let r = reservation("2024-06-01", "2024-06-03", status);
        assert_eq!(status.holds_room(), expected);
        assert_eq!(r.occupies("2024-06-01".parse().unwrap()), expected);
    }

    #[test]
    fn status_parses_from_stored_form() {
        assert_eq!(
            ReservationStatus::from_str("checked_in").unwrap(),
            ReservationStatus::CheckedIn
        );
        assert_eq!(ReservationStatus::Cancelled.to_string(), "cancelled");
        assert!(ReservationStatus::from_str("no_show").is_err());
    }
}
