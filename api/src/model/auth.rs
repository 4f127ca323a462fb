use crate::model::user::RoleName;
use garde::Validate;
use kernel::model::{id::UserId, user::User};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: RoleName,
}

impl From<User> for LoginResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            role,
            ..
        } = value;
        Self {
            user_id,
            name,
            email,
            role: role.into(),
        }
    }
}
