use actix_web::{http, test, HttpMessage};
use chrono::{Duration, Utc};
use entities::user;
use lettre::transport::stub::StubTransport;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::websites::verification::types::{
    WebsiteVerificationIssued, WebsiteVerificationRequest,
};
use web_adapters::MailTransport;

use crate::utils::{init_app, init_app_with_mail_transport, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites/verification")
        .set_json(WebsiteVerificationRequest {
            website_url: "https://www.Example.com/".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: WebsiteVerificationIssued = test::read_body_json(res).await;
    assert_eq!(res.website_url, "example.com");

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    let token = user_in_db.verification_token.unwrap();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        user_in_db.verification_website_url,
        Some("https://www.Example.com/".to_string())
    );

    let expires_at = user_in_db.verification_expires_at.unwrap();
    let expected = Utc::now() + Duration::hours(24);
    assert!(expires_at <= expected);
    assert!(expires_at > expected - Duration::minutes(1));
    assert!(!user_in_db.is_website_owner);

    Ok(())
}

#[actix_web::test]
async fn reissuing_replaces_pending_request() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .pending_verification("stale-token", Utc::now() + Duration::hours(3), "old.example.com")
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/websites/verification")
        .set_json(WebsiteVerificationRequest {
            website_url: "new.example.com".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_ne!(user_in_db.verification_token, Some("stale-token".to_string()));
    assert!(user_in_db.verification_token.is_some());
    assert_eq!(
        user_in_db.verification_website_url,
        Some("new.example.com".to_string())
    );

    Ok(())
}

#[actix_web::test]
async fn bad_gateway_if_email_fails_but_token_is_kept() -> Result<(), DbErr> {
    let Connections { app, db, .. } =
        init_app_with_mail_transport(MailTransport::Stub(StubTransport::new_error())).await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites/verification")
        .set_json(WebsiteVerificationRequest {
            website_url: "example.com".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_GATEWAY);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.verification_token.is_some());
    assert!(user_in_db.verification_expires_at.is_some());

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_empty_url() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites/verification")
        .set_json(WebsiteVerificationRequest {
            website_url: "  ".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.verification_token.is_none());

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/websites/verification")
        .set_json(WebsiteVerificationRequest {
            website_url: "example.com".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn not_found_if_user_is_inactive() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().is_active(false).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites/verification")
        .set_json(WebsiteVerificationRequest {
            website_url: "example.com".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
