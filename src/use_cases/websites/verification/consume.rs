use chrono::Utc;
use db_adapters::{
    user_adapter::{UserAdapter, UserFilter, UserMutation, UserQuery},
    website_adapter::{WebsiteAdapter, WebsiteMutation, WebsiteQuery},
};
use entities::custom_methods::user::UserVerificationTrait;
use sea_orm::{DbConn, TransactionTrait};

use crate::websites::{
    url::canonicalize_website_url,
    verification::types::{verification_error_500, WebsiteVerificationError},
};

/// Consumes a verification token and links the website to its owner.
/// Returns the canonical url of the verified website.
///
/// Both rows are written in one transaction. The user row is claimed with a conditional
/// update on the token and expiry, so a token can only ever be consumed once.
pub async fn consume_website_verification(
    token: String,
    db: &DbConn,
) -> Result<String, WebsiteVerificationError> {
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(WebsiteVerificationError::InvalidOrExpiredToken);
    }
    let now = Utc::now();

    let txn = db.begin().await.map_err(verification_error_500)?;

    let user = UserAdapter::init(&txn)
        .filter_eq_verification_token(&token)
        .filter_verification_expires_after(now)
        .get_one()
        .await
        .map_err(verification_error_500)?
        .ok_or(WebsiteVerificationError::InvalidOrExpiredToken)?;
    let pending = user
        .pending_verification()
        .filter(|pending| !pending.is_expired_at(now))
        .ok_or(WebsiteVerificationError::InvalidOrExpiredToken)?;

    let website_url = canonicalize_website_url(&pending.website_url)
        .map_err(|_| WebsiteVerificationError::WebsiteNotFound)?;
    let website = WebsiteAdapter::init(&txn)
        .get_by_url(website_url.clone())
        .await
        .map_err(verification_error_500)?
        .ok_or(WebsiteVerificationError::WebsiteNotFound)?;

    let claimed = UserAdapter::init(&txn)
        .claim_verification(user.id, &token, now)
        .await
        .map_err(verification_error_500)?;
    if !claimed {
        return Err(WebsiteVerificationError::InvalidOrExpiredToken);
    }

    WebsiteAdapter::init(&txn)
        .mark_verified(website, user.id, now)
        .await
        .map_err(verification_error_500)?;

    txn.commit().await.map_err(verification_error_500)?;
    Ok(website_url)
}
