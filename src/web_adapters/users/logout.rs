use actix_web::{post, HttpResponse};

use crate::utils::{auth::session::get_user_id, response_400, SuccessResponse};

#[tracing::instrument(name = "Log out user", skip(session))]
#[post("/logout")]
pub async fn log_out(session: actix_session::Session) -> HttpResponse {
    match get_user_id(&session) {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User_id retrieved from the session.");
            session.purge();
            HttpResponse::Ok().json(SuccessResponse {
                message: "You have successfully logged out".to_string(),
            })
        }
        Err(_) => response_400(
            "We currently have some issues. Kindly try again and ensure you are logged in.",
        ),
    }
}
