use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery};
use deadpool_redis::{
    redis::{AsyncCommands, SetExpiry, SetOptions},
    Connection, Pool,
};
use sea_orm::DbConn;
use use_cases::users::types::{LoginRequest, UserVisible};

use crate::utils::{
    auth::{password::verify_password, session::renew_session},
    response_404, response_500, ErrorResponse,
};

const NOT_FOUND_MESSAGE: &str = "A user with these details does not exist.";

#[tracing::instrument(name = "Logging a user in", skip(db, redis_pool, req, session, settings), fields(user_email = %req.email))]
#[post("/login")]
pub async fn login_user(
    db: Data<DbConn>,
    redis_pool: Data<Pool>,
    req: Json<LoginRequest>,
    session: actix_session::Session,
    settings: Data<Settings>,
) -> HttpResponse {
    let mut redis_con = match redis_pool.get().await {
        Ok(redis_con) => redis_con,
        Err(e) => return response_500(e),
    };
    let email = req.email.trim().to_lowercase();
    let (login_request_count_key, login_request_count) =
        match validate_request_count(&mut redis_con, &email, &settings).await {
            Ok(counter) => counter,
            Err(_) => {
                return HttpResponse::Unauthorized().json(ErrorResponse {
                    error: "Your account is temporarily locked. Please wait for 1 hour."
                        .to_string(),
                })
            }
        };

    let user = match UserAdapter::init(db.get_ref())
        .filter_eq_is_active(true)
        .get_by_email(email)
        .await
    {
        Ok(user) => user,
        Err(e) => return response_500(e),
    };

    match user {
        Some(user) if verify_password(&user.password, req.password.as_bytes()).is_ok() => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
            if let Err(e) = redis_con.del::<&str, ()>(&login_request_count_key).await {
                tracing::event!(target: "redis", tracing::Level::WARN, "Error deleting login_request_count_key from Redis: {:#?}", e)
            };
            match renew_session(&session, user.id, user.email.clone()) {
                Ok(_) => HttpResponse::Ok().json(UserVisible::from(user)),
                Err(e) => response_500(e),
            }
        }
        _ => {
            increment_login_request_count(
                &mut redis_con,
                login_request_count_key,
                login_request_count,
                &settings,
            )
            .await;
            response_404(NOT_FOUND_MESSAGE)
        }
    }
}

async fn validate_request_count(
    redis_con: &mut Connection,
    email: &str,
    settings: &Settings,
) -> Result<(String, u64), String> {
    let login_request_count_key = format!("login_count_{}", email);
    let login_request_count = redis_con
        .get::<&str, Option<u64>>(&login_request_count_key)
        .await
        .map_err(|e| {
            tracing::event!(target: "backend", tracing::Level::WARN, "Error getting login_request_count, defaults to 0: {}", e);
        })
        .ok()
        .flatten()
        .unwrap_or(0);
    if login_request_count >= settings.application.max_login_attempts {
        Err("Too many login requests".to_string())
    } else {
        Ok((login_request_count_key, login_request_count))
    }
}

async fn increment_login_request_count(
    redis_con: &mut Connection,
    login_request_count_key: String,
    login_request_count: u64,
    settings: &Settings,
) {
    if let Err(e) = redis_con
        .set_options::<String, u64, ()>(
            login_request_count_key,
            login_request_count + 1,
            SetOptions::default().with_expiration(SetExpiry::EX(
                settings.application.login_attempts_cool_time_seconds,
            )),
        )
        .await
    {
        tracing::event!(target: "redis", tracing::Level::WARN, "Error adding login_request_count_key to Redis: {:#?}", e)
    };
}
