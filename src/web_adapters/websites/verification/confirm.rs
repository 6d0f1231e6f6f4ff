use actix_web::{
    get,
    http::header,
    web::{Data, Path},
    HttpResponse,
};
use common::settings::types::Settings;
use sea_orm::DbConn;
use url::Url;
use use_cases::websites::verification::{
    consume::consume_website_verification, types::WebsiteVerificationError,
};

use crate::utils::response_500;

#[derive(serde::Deserialize)]
struct PathParam {
    token: String,
}

#[tracing::instrument(name = "Confirming a website verification", skip(db, path_param, settings))]
#[get("/verification/{token}")]
pub async fn confirm_website_verification_endpoint(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
    settings: Data<Settings>,
) -> HttpResponse {
    let frontend_url = &settings.application.frontend_url;

    match consume_website_verification(path_param.into_inner().token, db.get_ref()).await {
        Ok(website_url) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Website {} was verified successfully.", website_url);
            see_other(
                &format!("{}/claim/verified", frontend_url),
                &[("website", website_url.as_str())],
            )
        }
        Err(e) => {
            match &e {
                WebsiteVerificationError::InternalServerError(_) => {
                    tracing::event!(target: "backend", tracing::Level::ERROR, "Cannot verify website: {:?}", e)
                }
                _ => {
                    tracing::event!(target: "backend", tracing::Level::INFO, "Website verification rejected: {}", e.reason())
                }
            };
            see_other(
                &format!("{}/claim", frontend_url),
                &[("step", "verify"), ("error", e.reason())],
            )
        }
    }
}

fn see_other(path: &str, params: &[(&str, &str)]) -> HttpResponse {
    match Url::parse_with_params(path, params) {
        Ok(location) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location.as_str()))
            .finish(),
        Err(e) => response_500(e),
    }
}
