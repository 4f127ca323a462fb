use crate::model::user::{event::CreateUser, User};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a staff user. Fails with `DuplicateEntity` when the name or
    /// email is already taken.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
}
