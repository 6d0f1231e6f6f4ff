use chrono::{DateTime, FixedOffset};
use entities::user;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UserVisible {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub is_website_owner: bool,
    pub is_verified_website_owner: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl From<user::Model> for UserVisible {
    fn from(value: user::Model) -> Self {
        Self {
            id: value.id,
            email: value.email,
            name: value.name,
            is_active: value.is_active,
            is_website_owner: value.is_website_owner,
            is_verified_website_owner: value.is_verified_website_owner,
            created_at: value.created_at,
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone)]
pub struct UserRegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
