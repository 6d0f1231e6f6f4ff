use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::user_adapter::UserAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::websites::verification::{
    issue::issue_website_verification,
    types::{WebsiteVerificationError, WebsiteVerificationRequest},
};

use super::VERIFICATION_PATH;
use crate::{
    utils::{response_400, response_401, response_404, response_500, response_502},
    Mailer,
};

#[tracing::instrument(
    name = "Issuing a website verification",
    skip(db, user, req, mailer, settings),
    fields(website_url = %req.website_url)
)]
#[post("/verification")]
pub async fn issue_website_verification_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<WebsiteVerificationRequest>,
    mailer: Data<Mailer>,
    settings: Data<Settings>,
) -> HttpResponse {
    let verification_link_base = format!("{}{}", settings.web_address(), VERIFICATION_PATH);

    match issue_website_verification(
        user.map(|user| user.into_inner().email),
        req.into_inner(),
        &verification_link_base,
        UserAdapter::init(db.get_ref()),
        mailer.get_ref(),
    )
    .await
    {
        Ok(res) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Website verification email sent.");
            HttpResponse::Ok().json(res)
        }
        Err(e) => match &e {
            WebsiteVerificationError::Unauthenticated => response_401(),
            WebsiteVerificationError::UserNotFound => response_404(&e.to_string()),
            WebsiteVerificationError::InvalidWebsiteUrl(_) => response_400(&e.to_string()),
            WebsiteVerificationError::EmailDeliveryFailed(_) => response_502(&e, &e.to_string()),
            _ => response_500(e),
        },
    }
}
