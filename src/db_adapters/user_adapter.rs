use std::future::Future;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, Select, Set,
};
use uuid::Uuid;

use entities::user::{ActiveModel, Column, Entity, Model};

pub struct UserAdapter<'a, C: ConnectionTrait> {
    pub db: &'a C,
    pub query: Select<Entity>,
}

impl<'a, C: ConnectionTrait> UserAdapter<'a, C> {
    pub fn init(db: &'a C) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

impl<C: ConnectionTrait> Clone for UserAdapter<'_, C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db,
            query: self.query.clone(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_is_active(self, is_active: bool) -> Self;
    fn filter_eq_verification_token(self, token: &str) -> Self;
    fn filter_verification_expires_after(self, now: DateTime<Utc>) -> Self;
}

impl<C: ConnectionTrait> UserFilter for UserAdapter<'_, C> {
    fn filter_eq_is_active(mut self, is_active: bool) -> Self {
        self.query = self.query.filter(Column::IsActive.eq(is_active));
        self
    }

    fn filter_eq_verification_token(mut self, token: &str) -> Self {
        self.query = self.query.filter(Column::VerificationToken.eq(token));
        self
    }

    fn filter_verification_expires_after(mut self, now: DateTime<Utc>) -> Self {
        let now: DateTime<FixedOffset> = now.into();
        self.query = self.query.filter(Column::VerificationExpiresAt.gt(now));
        self
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl<C: ConnectionTrait> UserQuery for UserAdapter<'_, C> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_email(self, email: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
    }

    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct VerificationRequestParams {
    pub token: String,
    pub expires_at: DateTime<FixedOffset>,
    pub website_url: String,
}

pub trait UserMutation {
    fn create(self, params: CreateUserParams) -> impl Future<Output = Result<Model, DbErr>>;
    /// Overwrites the user's pending verification request. Returns the number of rows touched.
    fn replace_verification_request(
        self,
        email: String,
        params: VerificationRequestParams,
    ) -> impl Future<Output = Result<u64, DbErr>>;
    /// Clears the pending request and marks the user as a verified website owner,
    /// only if the token still matches and has not expired. Returns whether the row was claimed.
    fn claim_verification(
        self,
        user_id: Uuid,
        token: &str,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool, DbErr>>;
}

impl<C: ConnectionTrait> UserMutation for UserAdapter<'_, C> {
    async fn create(self, params: CreateUserParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            email: Set(params.email),
            password: Set(params.password),
            name: Set(params.name),
            is_active: Set(true),
            is_website_owner: Set(false),
            is_verified_website_owner: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            verification_token: Set(None),
            verification_expires_at: Set(None),
            verification_website_url: Set(None),
        }
        .insert(self.db)
        .await
    }

    async fn replace_verification_request(
        self,
        email: String,
        params: VerificationRequestParams,
    ) -> Result<u64, DbErr> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Entity::update_many()
            .col_expr(Column::VerificationToken, Expr::value(params.token))
            .col_expr(Column::VerificationExpiresAt, Expr::value(params.expires_at))
            .col_expr(Column::VerificationWebsiteUrl, Expr::value(params.website_url))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Email.eq(email))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected)
    }

    async fn claim_verification(
        self,
        user_id: Uuid,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let now: DateTime<FixedOffset> = now.into();
        Entity::update_many()
            .col_expr(Column::IsWebsiteOwner, Expr::value(true))
            .col_expr(Column::IsVerifiedWebsiteOwner, Expr::value(true))
            .col_expr(Column::VerificationToken, Expr::value(Option::<String>::None))
            .col_expr(
                Column::VerificationExpiresAt,
                Expr::value(Option::<DateTime<FixedOffset>>::None),
            )
            .col_expr(
                Column::VerificationWebsiteUrl,
                Expr::value(Option::<String>::None),
            )
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(user_id))
            .filter(Column::VerificationToken.eq(token))
            .filter(Column::VerificationExpiresAt.gt(now))
            .exec(self.db)
            .await
            .map(|res| res.rows_affected == 1)
    }
}
