use actix_web::web::{scope, ServiceConfig};

mod get_user;
mod login;
mod logout;
mod register;
pub mod types;

pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(register::register_user_endpoint)
            .service(login::login_user)
            .service(logout::log_out)
            .service(get_user::get_user),
    );
}
