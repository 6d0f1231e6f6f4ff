use db_adapters::{
    website_adapter::{WebsiteAdapter, WebsiteFilter, WebsiteOrder, WebsiteQuery},
    Order::Asc,
};
use entities::user as user_entity;
use sea_orm::ConnectionTrait;

use crate::{error_500, websites::types::WebsiteVisible, UseCaseError};

pub async fn list_my_websites<'a, C: ConnectionTrait>(
    user: user_entity::Model,
    website_adapter: WebsiteAdapter<'a, C>,
) -> Result<Vec<WebsiteVisible>, UseCaseError> {
    website_adapter
        .filter_eq_owner(&user)
        .order_by_created_at(Asc)
        .get_all()
        .await
        .map(|websites| websites.into_iter().map(WebsiteVisible::from).collect())
        .map_err(error_500)
}
