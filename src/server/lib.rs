use actix_session::{
    config::{PersistentSession, SessionMiddlewareBuilder},
    storage::RedisSessionStore,
};
use actix_web::{cookie, web::scope, Scope};
use common::settings::types::Settings;
use web_adapters::{user_routes, website_routes};

pub async fn get_preps_for_redis_session_store(
    settings: &Settings,
) -> Result<(RedisSessionStore, cookie::Key), String> {
    let secret_key = cookie::Key::from(settings.secret.hmac_secret.as_bytes());
    let redis_store = RedisSessionStore::new(settings.redis.url.clone())
        .await
        .map_err(|e| format!("Error on getting RedisSessionStore: {:?}", e))?;
    Ok((redis_store, secret_key))
}

pub fn setup_session_middleware_builder(
    builder: SessionMiddlewareBuilder<RedisSessionStore>,
    settings: &Settings,
) -> SessionMiddlewareBuilder<RedisSessionStore> {
    let builder = builder
        .session_lifecycle(PersistentSession::default().session_ttl(cookie::time::Duration::days(7)))
        .cookie_name("sessionId".to_string());
    if settings.debug {
        builder
            .cookie_same_site(cookie::SameSite::None)
            .cookie_secure(false)
    } else {
        builder
    }
}

pub fn get_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(user_routes)
        .configure(website_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
