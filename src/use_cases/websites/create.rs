use db_adapters::{
    website_adapter::{CreateWebsiteParams, WebsiteAdapter, WebsiteMutation},
    CustomDbErr,
};
use sea_orm::ConnectionTrait;

use crate::{
    error_500,
    websites::{
        types::{WebsiteCreateRequest, WebsiteVisible},
        url::canonicalize_website_url,
    },
    UseCaseError,
};

pub async fn create_website<'a, C: ConnectionTrait>(
    params: WebsiteCreateRequest,
    website_adapter: WebsiteAdapter<'a, C>,
) -> Result<WebsiteVisible, UseCaseError> {
    let url = canonicalize_website_url(&params.url)
        .map_err(|e| UseCaseError::BadRequest(e.to_string()))?;
    let name = match params.name.trim() {
        "" => url.clone(),
        name => name.to_string(),
    };

    website_adapter
        .create(CreateWebsiteParams { url, name })
        .await
        .map(WebsiteVisible::from)
        .map_err(|e| match CustomDbErr::from(&e) {
            CustomDbErr::Duplicate => {
                UseCaseError::Conflict("This website is already listed.".to_string())
            }
            _ => error_500(e),
        })
}
