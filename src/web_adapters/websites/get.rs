use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::website_adapter::WebsiteAdapter;
use sea_orm::DbConn;
use use_cases::{websites::get::get_website_by_url, UseCaseError};

use crate::utils::{response_400, response_404, response_500};

#[derive(serde::Deserialize, Debug)]
struct UrlQuery {
    url: String,
}

#[tracing::instrument(name = "Getting a website by url", skip(db))]
#[get("")]
pub async fn get_website_endpoint(db: Data<DbConn>, query: Query<UrlQuery>) -> HttpResponse {
    match get_website_by_url(query.into_inner().url, WebsiteAdapter::init(db.get_ref())).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
