use actix_web::{dev::ServiceResponse, http, test};
use chrono::{Duration, Utc};
use entities::{user, website};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

const TOKEN: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0";

fn location(res: &ServiceResponse) -> String {
    res.headers()
        .get(http::header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

fn confirm_request(token: &str) -> actix_http::Request {
    test::TestRequest::get()
        .uri(&format!("/api/websites/verification/{}", token))
        .to_request()
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let website = factory::website().url("example.com").insert(&db).await?;
    let user = factory::user()
        .pending_verification(TOKEN, Utc::now() + Duration::hours(1), "https://www.example.com/")
        .insert(&db)
        .await?;

    let res = test::call_service(&app, confirm_request(TOKEN)).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        location(&res),
        format!(
            "{}/claim/verified?website=example.com",
            settings.application.frontend_url
        )
    );

    let website_in_db = website::Entity::find_by_id(website.id).one(&db).await?.unwrap();
    assert!(website_in_db.is_verified);
    assert_eq!(website_in_db.owner_id, Some(user.id));
    assert!(website_in_db.verified_at.is_some());

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.is_website_owner);
    assert!(user_in_db.is_verified_website_owner);
    assert!(user_in_db.verification_token.is_none());
    assert!(user_in_db.verification_expires_at.is_none());
    assert!(user_in_db.verification_website_url.is_none());

    Ok(())
}

#[actix_web::test]
async fn token_can_only_be_used_once() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    factory::website().url("example.com").insert(&db).await?;
    factory::user()
        .pending_verification(TOKEN, Utc::now() + Duration::hours(1), "example.com")
        .insert(&db)
        .await?;

    let res = test::call_service(&app, confirm_request(TOKEN)).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);

    let res = test::call_service(&app, confirm_request(TOKEN)).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        location(&res),
        format!(
            "{}/claim?step=verify&error=invalid_or_expired_token",
            settings.application.frontend_url
        )
    );

    Ok(())
}

#[actix_web::test]
async fn expired_token_changes_nothing() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let website = factory::website().url("example.com").insert(&db).await?;
    let user = factory::user()
        .pending_verification(TOKEN, Utc::now() - Duration::minutes(1), "example.com")
        .insert(&db)
        .await?;

    let res = test::call_service(&app, confirm_request(TOKEN)).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        location(&res),
        format!(
            "{}/claim?step=verify&error=invalid_or_expired_token",
            settings.application.frontend_url
        )
    );

    let website_in_db = website::Entity::find_by_id(website.id).one(&db).await?.unwrap();
    assert!(!website_in_db.is_verified);
    assert!(website_in_db.owner_id.is_none());

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(!user_in_db.is_verified_website_owner);
    assert_eq!(user_in_db.verification_token, Some(TOKEN.to_string()));

    Ok(())
}

#[actix_web::test]
async fn unlisted_website_leaves_user_untouched() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let user = factory::user()
        .pending_verification(TOKEN, Utc::now() + Duration::hours(1), "unlisted.example.com")
        .insert(&db)
        .await?;

    let res = test::call_service(&app, confirm_request(TOKEN)).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        location(&res),
        format!(
            "{}/claim?step=verify&error=website_not_found",
            settings.application.frontend_url
        )
    );

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(!user_in_db.is_website_owner);
    assert!(!user_in_db.is_verified_website_owner);
    assert_eq!(user_in_db.verification_token, Some(TOKEN.to_string()));

    Ok(())
}

#[actix_web::test]
async fn unknown_token_is_rejected() -> Result<(), DbErr> {
    let Connections { app, settings, .. } = init_app().await?;

    let res = test::call_service(&app, confirm_request("does-not-exist")).await;
    assert_eq!(res.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        location(&res),
        format!(
            "{}/claim?step=verify&error=invalid_or_expired_token",
            settings.application.frontend_url
        )
    );

    Ok(())
}
