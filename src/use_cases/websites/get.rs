use db_adapters::website_adapter::{WebsiteAdapter, WebsiteQuery};
use sea_orm::ConnectionTrait;

use crate::{
    error_500,
    websites::{types::WebsiteVisible, url::canonicalize_website_url},
    UseCaseError,
};

pub async fn get_website_by_url<'a, C: ConnectionTrait>(
    url: String,
    website_adapter: WebsiteAdapter<'a, C>,
) -> Result<WebsiteVisible, UseCaseError> {
    let url =
        canonicalize_website_url(&url).map_err(|e| UseCaseError::BadRequest(e.to_string()))?;

    website_adapter
        .get_by_url(url)
        .await
        .map_err(error_500)?
        .map(WebsiteVisible::from)
        .ok_or(UseCaseError::NotFound(
            "Website with this url was not found".to_string(),
        ))
}
