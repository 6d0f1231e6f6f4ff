use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    users::{register::register_user, types::UserRegisterRequest},
    UseCaseError,
};

use crate::utils::{auth::password, response_400, response_409, response_500};

#[tracing::instrument(
    name = "Adding a new user",
    skip(db, req),
    fields(new_user_mail = %req.email, new_user_name = %req.name)
)]
#[post("/register")]
pub async fn register_user_endpoint(
    db: Data<DbConn>,
    req: Json<UserRegisterRequest>,
) -> HttpResponse {
    let hashed_password = match password::hash(req.password.as_bytes()) {
        Ok(hashed_password) => hashed_password,
        Err(e) => return response_500(e),
    };

    match register_user(req.into_inner(), hashed_password, UserAdapter::init(db.get_ref())).await {
        Ok(res) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User created successfully.");
            HttpResponse::Created().json(res)
        }
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::Conflict(message) => response_409(message),
            _ => response_500(e),
        },
    }
}
