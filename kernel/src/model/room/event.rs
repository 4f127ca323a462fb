use crate::model::{
    id::UserId,
    room::{RoomCondition, RoomStatus, RoomType},
};

pub struct CreateRoom {
    pub room_number: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub room_condition: RoomCondition,
    pub registered_by: UserId,
}

/// Partial update: `None` fields keep their stored values.
#[derive(Debug)]
pub struct UpdateRoom {
    pub room_number: String,
    pub room_type: Option<RoomType>,
    pub status: Option<RoomStatus>,
    pub room_condition: Option<RoomCondition>,
}

/// One shared patch applied to a set of rooms in a single transaction.
#[derive(Debug)]
pub struct BulkUpdateRooms {
    pub room_numbers: Vec<String>,
    pub room_type: Option<RoomType>,
    pub status: Option<RoomStatus>,
    pub room_condition: Option<RoomCondition>,
}
