use crate::model::id::UserId;
use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

pub mod event;

/// Room categories. Stored capitalized (`Single`, `Double`) in the
/// `rooms.room_type` column, matching the seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum RoomType {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RoomStatus {
    Vacant,
    Occupied,
    Maintenance,
    Housekeeping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RoomCondition {
    Clean,
    Dirty,
    UnderMaintenance,
}

/// A physical room. `room_number` is the natural key; rooms are never
/// deleted in the normal flow.
#[derive(Debug, Clone)]
pub struct Room {
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub room_condition: RoomCondition,
    pub created_by: UserId,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("Single", RoomType::Single)]
    #[case("Double", RoomType::Double)]
    fn room_type_parses_from_stored_form(#[case] stored: &str, #[case] expected: RoomType) {
        assert_eq!(RoomType::from_str(stored).unwrap(), expected);
        assert_eq!(expected.to_string(), stored);
    }

    #[rstest]
    #[case("vacant", RoomStatus::Vacant)]
    #[case("occupied", RoomStatus::Occupied)]
    #[case("maintenance", RoomStatus::Maintenance)]
    #[case("housekeeping", RoomStatus::Housekeeping)]
    fn room_status_parses_from_stored_form(#[case] stored: &str, #[case] expected: RoomStatus) {
        assert_eq!(RoomStatus::from_str(stored).unwrap(), expected);
        assert_eq!(expected.to_string(), stored);
    }

    #[test]
    fn room_condition_uses_snake_case_storage() {
        assert_eq!(
            RoomCondition::from_str("under_maintenance").unwrap(),
            RoomCondition::UnderMaintenance
        );
        assert!(RoomCondition::from_str("broken").is_err());
    }
}
