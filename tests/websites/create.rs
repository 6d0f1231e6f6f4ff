use actix_web::{http, test, HttpMessage};
use entities::website;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::websites::types::{WebsiteCreateRequest, WebsiteVisible};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites")
        .set_json(WebsiteCreateRequest {
            url: "https://www.Tools.Example.com/pricing".to_string(),
            name: "Example Tools".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: WebsiteVisible = test::read_body_json(res).await;
    assert_eq!(res.url, "tools.example.com");
    assert_eq!(res.name, "Example Tools");
    assert!(!res.is_verified);
    assert!(res.owner_id.is_none());

    let website_in_db = website::Entity::find_by_id(res.id).one(&db).await?.unwrap();
    assert_eq!(WebsiteVisible::from(website_in_db), res);

    Ok(())
}

#[actix_web::test]
async fn name_falls_back_to_url() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites")
        .set_json(WebsiteCreateRequest {
            url: "example.ai".to_string(),
            name: "  ".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: WebsiteVisible = test::read_body_json(res).await;
    assert_eq!(res.name, "example.ai");

    Ok(())
}

#[actix_web::test]
async fn conflict_on_same_canonical_url() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    factory::website().url("example.com").insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites")
        .set_json(WebsiteCreateRequest {
            url: "http://WWW.example.com/".to_string(),
            name: "Duplicate".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CONFLICT);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_url() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/websites")
        .set_json(WebsiteCreateRequest {
            url: "ftp://example.com".to_string(),
            name: "Example".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/websites")
        .set_json(WebsiteCreateRequest {
            url: "example.com".to_string(),
            name: "Example".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
