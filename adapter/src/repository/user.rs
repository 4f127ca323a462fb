use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        user::{event::CreateUser, User},
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        // Pre-insert uniqueness check; the UNIQUE constraints on name and
        // email remain the backstop for the check-then-insert race.
        let existing = sqlx::query("SELECT user_id FROM users WHERE email = $1 OR name = $2")
            .bind(&event.email)
            .bind(&event.name)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if existing.is_some() {
            return Err(AppError::DuplicateEntity(
                "Email or Name already registered".into(),
            ));
        }

        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (user_id, name, email, role, password_hash)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING user_id, name, email, role, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(event.role.to_string())
        .bind(password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(de) if de.is_unique_violation() => {
                AppError::DuplicateEntity("Email or Name already registered".into())
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        row.try_into()
    }
}
