use chrono::{DateTime, FixedOffset};
use entities::website;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct WebsiteVisible {
    pub id: uuid::Uuid,
    pub url: String,
    pub name: String,
    pub is_verified: bool,
    pub owner_id: Option<uuid::Uuid>,
    pub verified_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<website::Model> for WebsiteVisible {
    fn from(value: website::Model) -> Self {
        Self {
            id: value.id,
            url: value.url,
            name: value.name,
            is_verified: value.is_verified,
            owner_id: value.owner_id,
            verified_at: value.verified_at,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WebsiteCreateRequest {
    pub url: String,
    pub name: String,
}
