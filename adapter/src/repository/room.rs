use crate::database::{model::room::RoomRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::room::{
        event::{BulkUpdateRooms, CreateRoom, UpdateRoom},
        Room, RoomType,
    },
    repository::room::RoomRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO rooms
                    (room_number, room_type, status, room_condition, created_by)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&event.room_number)
        .bind(event.room_type.to_string())
        .bind(event.status.to_string())
        .bind(event.room_condition.to_string())
        .bind(event.registered_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(de) if de.is_unique_violation() => AppError::DuplicateEntity(format!(
                "Room {} already registered",
                event.room_number
            )),
            _ => AppError::SpecificOperationError(e),
        })?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    room_number, room_type, status, room_condition,
                    created_by, updated_by, created_at, updated_at
                FROM rooms
                ORDER BY room_number
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Room::try_from).collect()
    }

    async fn find_by_room_number(&self, room_number: &str) -> AppResult<Option<Room>> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    room_number, room_type, status, room_condition,
                    created_by, updated_by, created_at, updated_at
                FROM rooms
                WHERE room_number = $1
            "#,
        )
        .bind(room_number)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Room::try_from).transpose()
    }

    async fn find_vacant(&self, room_type: Option<RoomType>) -> AppResult<Vec<Room>> {
        // A NULL second parameter disables the type filter.
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    room_number, room_type, status, room_condition,
                    created_by, updated_by, created_at, updated_at
                FROM rooms
                WHERE status = 'vacant'
                  AND ($1::text IS NULL OR room_type = $1)
                ORDER BY room_number
            "#,
        )
        .bind(room_type.map(|v| v.to_string()))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Room::try_from).collect()
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                UPDATE rooms
                SET room_type      = COALESCE($2, room_type),
                    status         = COALESCE($3, status),
                    room_condition = COALESCE($4, room_condition),
                    updated_at     = now()
                WHERE room_number = $1
                RETURNING
                    room_number, room_type, status, room_condition,
                    created_by, updated_by, created_at, updated_at
            "#,
        )
        .bind(&event.room_number)
        .bind(event.room_type.map(|v| v.to_string()))
        .bind(event.status.map(|v| v.to_string()))
        .bind(event.room_condition.map(|v| v.to_string()))
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AppError::EntityNotFound(format!(
                "Room {} not found",
                event.room_number
            ))),
        }
    }

    async fn bulk_update(&self, event: BulkUpdateRooms) -> AppResult<Vec<Room>> {
        let mut tx = self.db.begin().await?;

        // Each room is patched in turn; the first unknown room number
        // aborts the transaction, so the batch is all-or-nothing.
        let mut updated = Vec::with_capacity(event.room_numbers.len());
        for room_number in &event.room_numbers {
            let row = sqlx::query_as::<_, RoomRow>(
                r#"
                    UPDATE rooms
                    SET room_type      = COALESCE($2, room_type),
                        status         = COALESCE($3, status),
                        room_condition = COALESCE($4, room_condition),
                        updated_at     = now()
                    WHERE room_number = $1
                    RETURNING
                        room_number, room_type, status, room_condition,
                        created_by, updated_by, created_at, updated_at
                "#,
            )
            .bind(room_number)
            .bind(event.room_type.map(|v| v.to_string()))
            .bind(event.status.map(|v| v.to_string()))
            .bind(event.room_condition.map(|v| v.to_string()))
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            match row {
                Some(row) => updated.push(Room::try_from(row)?),
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "Room {room_number} not found"
                    )))
                }
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(updated)
    }
}
