use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            name,
            email,
            role,
            created_at,
            updated_at,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        Ok(User {
            user_id,
            name,
            email,
            role,
            created_at,
            updated_at,
        })
    }
}

/// Row used by the credential check; the hash never leaves the adapter.
#[derive(sqlx::FromRow)]
pub struct UserRowWithPassword {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserRowWithPassword {
    pub fn into_user(self) -> Result<User, AppError> {
        let UserRowWithPassword {
            user_id,
            name,
            email,
            role,
            password_hash: _,
            created_at,
            updated_at,
        } = self;
        UserRow {
            user_id,
            name,
            email,
            role,
            created_at,
            updated_at,
        }
        .try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_is_rejected() {
        let row = UserRow {
            user_id: UserId::new(),
            name: "alice".into(),
            email: "alice@example.com".into(),
            role: "janitor".into(),
            created_at: Utc::now(),
            updated_at: None,
        };
        assert!(matches!(
            User::try_from(row),
            Err(AppError::ConversionEntityError(_))
        ));
    }

    #[test]
    fn row_converts_to_user() {
        let user_id = UserId::new();
        let row = UserRow {
            user_id,
            name: "alice".into(),
            email: "alice@example.com".into(),
            role: "frontdesk".into(),
            created_at: Utc::now(),
            updated_at: None,
        };
        let user = User::try_from(row).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.role, Role::Frontdesk);
    }
}
