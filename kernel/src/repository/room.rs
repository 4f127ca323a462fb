use crate::model::room::{
    event::{BulkUpdateRooms, CreateRoom, UpdateRoom},
    Room, RoomType,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<()>;
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_room_number(&self, room_number: &str) -> AppResult<Option<Room>>;
    /// Rooms whose stored status is `vacant`, optionally narrowed to a type.
    async fn find_vacant(&self, room_type: Option<RoomType>) -> AppResult<Vec<Room>>;
    /// Patch one room; absent fields keep their stored values.
    async fn update(&self, event: UpdateRoom) -> AppResult<Room>;
    /// Apply one shared patch to a set of rooms in a single transaction.
    /// The first missing room number aborts the whole batch.
    async fn bulk_update(&self, event: BulkUpdateRooms) -> AppResult<Vec<Room>>;
}
