use actix_web::web::{scope, ServiceConfig};

mod create;
mod get;
mod list_mine;
mod verification;

pub fn website_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/websites")
            .service(create::create_website_endpoint)
            .service(get::get_website_endpoint)
            .service(list_mine::list_my_websites_endpoint)
            .service(verification::issue_website_verification_endpoint)
            .service(verification::confirm_website_verification_endpoint),
    );
}
