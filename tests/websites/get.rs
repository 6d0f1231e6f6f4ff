use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::websites::types::WebsiteVisible;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let website = factory::website().url("example.com").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/websites?url=https%3A%2F%2Fwww.example.com%2Fabout")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: WebsiteVisible = test::read_body_json(res).await;
    assert_eq!(res, WebsiteVisible::from(website));

    Ok(())
}

#[actix_web::test]
async fn not_found_if_not_listed() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/websites?url=unlisted.example.com")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_url() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/websites?url=mailto%3Aowner%40example.com")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
