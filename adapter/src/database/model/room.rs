use kernel::model::{
    id::UserId,
    room::{Room, RoomCondition, RoomStatus, RoomType},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_number: String,
    pub room_type: String,
    pub status: String,
    pub room_condition: String,
    pub created_by: UserId,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            room_number,
            room_type,
            status,
            room_condition,
            created_by,
            updated_by,
            created_at,
            updated_at,
        } = value;
        Ok(Room {
            room_number,
            room_type: RoomType::from_str(&room_type).map_err(|_| {
                AppError::ConversionEntityError(format!("unknown room_type: {room_type}"))
            })?,
            status: RoomStatus::from_str(&status).map_err(|_| {
                AppError::ConversionEntityError(format!("unknown room status: {status}"))
            })?,
            room_condition: RoomCondition::from_str(&room_condition).map_err(|_| {
                AppError::ConversionEntityError(format!(
                    "unknown room_condition: {room_condition}"
                ))
            })?,
            created_by,
            updated_by,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RoomRow {
        RoomRow {
            room_number: "101".into(),
            room_type: "Single".into(),
            status: "vacant".into(),
            room_condition: "clean".into(),
            created_by: UserId::new(),
            updated_by: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn row_converts_to_room() {
        let room = Room::try_from(row()).unwrap();
        assert_eq!(room.room_number, "101");
        assert_eq!(room.room_type, RoomType::Single);
        assert_eq!(room.status, RoomStatus::Vacant);
        assert_eq!(room.room_condition, RoomCondition::Clean);
    }

    #[test]
    fn out_of_set_status_is_rejected() {
        let mut bad = row();
        bad.status = "demolished".into();
        assert!(matches!(
            Room::try_from(bad),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
