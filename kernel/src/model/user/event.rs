use crate::model::role::Role;

pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}
