use crate::model::user::User;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Check the credentials against the stored hash and return the user.
    /// Unknown email and wrong password both surface as
    /// `UnauthenticatedError`.
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User>;
}
