use actix_web::{http, test};
use entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use use_cases::users::types::{UserRegisterRequest, UserVisible};

use crate::utils::{init_app, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(UserRegisterRequest {
            email: " Owner@Example.com ".to_string(),
            password: "password".to_string(),
            name: "Lynx Levin".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: UserVisible = test::read_body_json(res).await;
    assert_eq!(res.email, "owner@example.com");
    assert!(!res.is_website_owner);

    let user_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("owner@example.com"))
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(user_in_db.id, res.id);
    assert_ne!(user_in_db.password, "password");
    assert!(user_in_db.password.starts_with("$argon2id$"));

    Ok(())
}

#[actix_web::test]
async fn conflict_on_duplicate_email() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(UserRegisterRequest {
            email: user.email.clone(),
            password: "password".to_string(),
            name: "Someone Else".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::CONFLICT);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_email() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(UserRegisterRequest {
            email: "not-an-email".to_string(),
            password: "password".to_string(),
            name: "Lynx Levin".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
