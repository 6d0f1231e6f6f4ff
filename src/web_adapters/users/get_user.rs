use actix_web::{get, web::ReqData, HttpResponse};
use entities::user as user_entity;
use use_cases::users::types::UserVisible;

use crate::utils::response_401;

#[tracing::instrument(name = "Getting the current user", skip(user))]
#[get("/me")]
pub async fn get_user(user: Option<ReqData<user_entity::Model>>) -> HttpResponse {
    match user {
        Some(user) => HttpResponse::Ok().json(UserVisible::from(user.into_inner())),
        None => response_401(),
    }
}
