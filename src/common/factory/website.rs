use chrono::Utc;
use entities::website;
use sea_orm::Set;

pub fn website() -> website::ActiveModel {
    let now = Utc::now();
    let id = uuid::Uuid::now_v7();
    website::ActiveModel {
        id: Set(id),
        url: Set(format!("{}.example.com", id.simple())),
        name: Set("Example AI".to_string()),
        is_verified: Set(false),
        owner_id: Set(None),
        verified_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait WebsiteFactory {
    fn url(self, canonical_url: &str) -> website::ActiveModel;
    fn owner_id(self, owner_id: uuid::Uuid) -> website::ActiveModel;
}

impl WebsiteFactory for website::ActiveModel {
    fn url(mut self, canonical_url: &str) -> website::ActiveModel {
        self.url = Set(canonical_url.to_string());
        self
    }

    fn owner_id(mut self, owner_id: uuid::Uuid) -> website::ActiveModel {
        self.owner_id = Set(Some(owner_id));
        self.is_verified = Set(true);
        self.verified_at = Set(Some(Utc::now().into()));
        self
    }
}
