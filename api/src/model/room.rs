use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    reservation::ReservedRoom,
    room::{
        event::{BulkUpdateRooms, CreateRoom, UpdateRoom},
        Room, RoomCondition, RoomStatus, RoomType,
    },
};
use serde::{Deserialize, Serialize};

use crate::model::reservation::ReservationStatusName;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum RoomTypeName {
    Single,
    Double,
}

impl From<RoomType> for RoomTypeName {
    fn from(value: RoomType) -> Self {
        match value {
            RoomType::Single => Self::Single,
            RoomType::Double => Self::Double,
        }
    }
}

impl From<RoomTypeName> for RoomType {
    fn from(value: RoomTypeName) -> Self {
        match value {
            RoomTypeName::Single => Self::Single,
            RoomTypeName::Double => Self::Double,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatusName {
    Vacant,
    Occupied,
    Maintenance,
    Housekeeping,
}

impl From<RoomStatus> for RoomStatusName {
    fn from(value: RoomStatus) -> Self {
        match value {
            RoomStatus::Vacant => Self::Vacant,
            RoomStatus::Occupied => Self::Occupied,
            RoomStatus::Maintenance => Self::Maintenance,
            RoomStatus::Housekeeping => Self::Housekeeping,
        }
    }
}

impl From<RoomStatusName> for RoomStatus {
    fn from(value: RoomStatusName) -> Self {
        match value {
            RoomStatusName::Vacant => Self::Vacant,
            RoomStatusName::Occupied => Self::Occupied,
            RoomStatusName::Maintenance => Self::Maintenance,
            RoomStatusName::Housekeeping => Self::Housekeeping,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomConditionName {
    Clean,
    Dirty,
    UnderMaintenance,
}

impl From<RoomCondition> for RoomConditionName {
    fn from(value: RoomCondition) -> Self {
        match value {
            RoomCondition::Clean => Self::Clean,
            RoomCondition::Dirty => Self::Dirty,
            RoomCondition::UnderMaintenance => Self::UnderMaintenance,
        }
    }
}

impl From<RoomConditionName> for RoomCondition {
    fn from(value: RoomConditionName) -> Self {
        match value {
            RoomConditionName::Clean => Self::Clean,
            RoomConditionName::Dirty => Self::Dirty,
            RoomConditionName::UnderMaintenance => Self::UnderMaintenance,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1, max = 10))]
    pub room_number: String,
    #[garde(skip)]
    pub room_type: RoomTypeName,
    /// Defaults to `vacant` when omitted, matching the seed data.
    #[garde(skip)]
    pub status: Option<RoomStatusName>,
    /// Defaults to `clean` when omitted.
    #[garde(skip)]
    pub room_condition: Option<RoomConditionName>,
    #[garde(skip)]
    pub created_by: UserId,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            room_number,
            room_type,
            status,
            room_condition,
            created_by,
        } = value;
        Self {
            room_number,
            room_type: room_type.into(),
            status: status.map(RoomStatus::from).unwrap_or(RoomStatus::Vacant),
            room_condition: room_condition
                .map(RoomCondition::from)
                .unwrap_or(RoomCondition::Clean),
            registered_by: created_by,
        }
    }
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    pub room_type: Option<RoomTypeName>,
    pub status: Option<RoomStatusName>,
    pub room_condition: Option<RoomConditionName>,
}

#[derive(new)]
pub struct UpdateRoomRequestWithRoomNumber(String, UpdateRoomRequest);

impl From<UpdateRoomRequestWithRoomNumber> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithRoomNumber) -> Self {
        let UpdateRoomRequestWithRoomNumber(
            room_number,
            UpdateRoomRequest {
                room_type,
                status,
                room_condition,
            },
        ) = value;
        Self {
            room_number,
            room_type: room_type.map(RoomType::from),
            status: status.map(RoomStatus::from),
            room_condition: room_condition.map(RoomCondition::from),
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateRoomsRequest {
    #[garde(length(min = 1))]
    pub room_numbers: Vec<String>,
    #[garde(skip)]
    pub room_type: Option<RoomTypeName>,
    #[garde(skip)]
    pub status: Option<RoomStatusName>,
    #[garde(skip)]
    pub room_condition: Option<RoomConditionName>,
}

impl From<BulkUpdateRoomsRequest> for BulkUpdateRooms {
    fn from(value: BulkUpdateRoomsRequest) -> Self {
        let BulkUpdateRoomsRequest {
            room_numbers,
            room_type,
            status,
            room_condition,
        } = value;
        Self {
            room_numbers,
            room_type: room_type.map(RoomType::from),
            status: status.map(RoomStatus::from),
            room_condition: room_condition.map(RoomCondition::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_number: String,
    pub room_type: RoomTypeName,
    pub status: RoomStatusName,
    pub room_condition: RoomConditionName,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_number,
            room_type,
            status,
            room_condition,
            ..
        } = value;
        Self {
            room_number,
            room_type: room_type.into(),
            status: status.into(),
            room_condition: room_condition.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacantRoomsQuery {
    pub room_type: Option<RoomTypeName>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedRoomsResponse {
    pub items: Vec<ReservedRoomResponse>,
}

impl From<Vec<ReservedRoom>> for ReservedRoomsResponse {
    fn from(value: Vec<ReservedRoom>) -> Self {
        Self {
            items: value.into_iter().map(ReservedRoomResponse::from).collect(),
        }
    }
}

/// The reserved set for a type and date, keyed by the (possibly not yet
/// assigned) room each conflicting reservation holds.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedRoomResponse {
    pub room_number: Option<String>,
    pub room_type: RoomTypeName,
    pub status: ReservationStatusName,
}

impl From<ReservedRoom> for ReservedRoomResponse {
    fn from(value: ReservedRoom) -> Self {
        let ReservedRoom {
            room_number,
            room_type,
            status,
        } = value;
        Self {
            room_number,
            room_type: room_type.into(),
            status: status.into(),
        }
    }
}
