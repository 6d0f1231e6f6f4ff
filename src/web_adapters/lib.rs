mod middlewares;
mod users;
mod utils;
mod websites;

pub use middlewares::auth as auth_middleware;
pub use users::user_routes;
pub use utils::emails::{MailTransport, Mailer};
pub use websites::website_routes;
