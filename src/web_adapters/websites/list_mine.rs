use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::website_adapter::WebsiteAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::websites::list_mine::list_my_websites;

use crate::utils::{response_401, response_500};

#[tracing::instrument(name = "Listing a user's verified websites", skip(db, user))]
#[get("/mine")]
pub async fn list_my_websites_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match list_my_websites(user.into_inner(), WebsiteAdapter::init(db.get_ref())).await {
                Ok(res) => HttpResponse::Ok().json(res),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
