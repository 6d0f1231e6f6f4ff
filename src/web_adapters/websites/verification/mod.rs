mod confirm;
mod issue;

pub use confirm::confirm_website_verification_endpoint;
pub use issue::issue_website_verification_endpoint;

pub(crate) const VERIFICATION_PATH: &str = "/api/websites/verification";
