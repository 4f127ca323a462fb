use crate::database::{model::user::UserRowWithPassword, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{model::user::User, repository::auth::AuthRepository};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRowWithPassword>(
            r#"
                SELECT user_id, name, email, role, password_hash,
                       created_at, updated_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Unknown email and wrong password produce the same error so the
        // response does not leak which one was wrong.
        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        if !bcrypt::verify(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError);
        }

        row.into_user()
    }
}
