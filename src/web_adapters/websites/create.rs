use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::website_adapter::WebsiteAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    websites::{create::create_website, types::WebsiteCreateRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_409, response_500};

#[tracing::instrument(name = "Listing a new website", skip(db, user))]
#[post("")]
pub async fn create_website_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<WebsiteCreateRequest>,
) -> HttpResponse {
    match user {
        Some(_) => match create_website(req.into_inner(), WebsiteAdapter::init(db.get_ref())).await
        {
            Ok(res) => HttpResponse::Created().json(res),
            Err(e) => match &e {
                UseCaseError::BadRequest(message) => response_400(message),
                UseCaseError::Conflict(message) => response_409(message),
                _ => response_500(e),
            },
        },
        None => response_401(),
    }
}
