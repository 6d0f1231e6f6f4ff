use chrono::{DateTime, Utc};
use entities::user;
use sea_orm::Set;

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7())),
        password: Set("password".to_string()),
        name: Set("Lynx Levin".to_string()),
        is_active: Set(true),
        is_website_owner: Set(false),
        is_verified_website_owner: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        verification_token: Set(None),
        verification_expires_at: Set(None),
        verification_website_url: Set(None),
    }
}

pub trait UserFactory {
    fn is_active(self, is_active: bool) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
    fn pending_verification(
        self,
        token: &str,
        expires_at: DateTime<Utc>,
        website_url: &str,
    ) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn is_active(mut self, is_active: bool) -> user::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }

    fn pending_verification(
        mut self,
        token: &str,
        expires_at: DateTime<Utc>,
        website_url: &str,
    ) -> user::ActiveModel {
        self.verification_token = Set(Some(token.to_string()));
        self.verification_expires_at = Set(Some(expires_at.into()));
        self.verification_website_url = Set(Some(website_url.to_string()));
        self
    }
}
