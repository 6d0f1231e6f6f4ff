use std::future::Future;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    user,
    website::{ActiveModel, Column, Entity, Model},
};

pub struct WebsiteAdapter<'a, C: ConnectionTrait> {
    pub db: &'a C,
    pub query: Select<Entity>,
}

impl<'a, C: ConnectionTrait> WebsiteAdapter<'a, C> {
    pub fn init(db: &'a C) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

impl<C: ConnectionTrait> Clone for WebsiteAdapter<'_, C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db,
            query: self.query.clone(),
        }
    }
}

pub trait WebsiteFilter {
    fn filter_eq_owner(self, owner: &user::Model) -> Self;
}

impl<C: ConnectionTrait> WebsiteFilter for WebsiteAdapter<'_, C> {
    fn filter_eq_owner(mut self, owner: &user::Model) -> Self {
        self.query = self.query.filter(Column::OwnerId.eq(owner.id));
        self
    }
}

pub trait WebsiteOrder {
    fn order_by_created_at(self, order: Order) -> Self;
}

impl<C: ConnectionTrait> WebsiteOrder for WebsiteAdapter<'_, C> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait WebsiteQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    /// Looks a website up by its canonical url key.
    fn get_by_url(self, url: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl<C: ConnectionTrait> WebsiteQuery for WebsiteAdapter<'_, C> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_url(self, url: String) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Url.eq(url)).one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateWebsiteParams {
    pub url: String,
    pub name: String,
}

pub trait WebsiteMutation {
    fn create(self, params: CreateWebsiteParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn mark_verified(
        self,
        website: Model,
        owner_id: Uuid,
        verified_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Model, DbErr>>;
}

impl<C: ConnectionTrait> WebsiteMutation for WebsiteAdapter<'_, C> {
    async fn create(self, params: CreateWebsiteParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            url: Set(params.url),
            name: Set(params.name),
            is_verified: Set(false),
            owner_id: Set(None),
            verified_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn mark_verified(
        self,
        website: Model,
        owner_id: Uuid,
        verified_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let mut website = website.into_active_model();
        website.is_verified = Set(true);
        website.owner_id = Set(Some(owner_id));
        website.verified_at = Set(Some(verified_at.into()));
        website.updated_at = Set(verified_at.into());
        website.update(self.db).await
    }
}
