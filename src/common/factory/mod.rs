mod user;
mod website;

pub use user::*;
pub use website::*;
