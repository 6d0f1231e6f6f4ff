use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{Duration, Utc};
use db_adapters::user_adapter::{
    UserAdapter, UserFilter, UserMutation, UserQuery, VerificationRequestParams,
};
use sea_orm::ConnectionTrait;

use crate::websites::{
    url::canonicalize_website_url,
    verification::types::{
        verification_error_500, VerificationMailer, WebsiteVerificationEmail,
        WebsiteVerificationError, WebsiteVerificationIssued, WebsiteVerificationRequest,
        VERIFICATION_TOKEN_BYTES, VERIFICATION_TOKEN_TTL_HOURS,
    },
};

/// Issues a fresh ownership token for `params.website_url`, replacing any pending one,
/// and emails the confirming link. A failed send leaves the new token in place.
pub async fn issue_website_verification<'a, C: ConnectionTrait, M: VerificationMailer>(
    principal_email: Option<String>,
    params: WebsiteVerificationRequest,
    verification_link_base: &str,
    user_adapter: UserAdapter<'a, C>,
    mailer: &M,
) -> Result<WebsiteVerificationIssued, WebsiteVerificationError> {
    let email = principal_email.ok_or(WebsiteVerificationError::Unauthenticated)?;
    let website_url = params.website_url.trim().to_string();
    let canonical_url = canonicalize_website_url(&website_url)
        .map_err(|e| WebsiteVerificationError::InvalidWebsiteUrl(e.0))?;

    let user = user_adapter
        .clone()
        .filter_eq_is_active(true)
        .get_by_email(email.clone())
        .await
        .map_err(verification_error_500)?
        .ok_or(WebsiteVerificationError::UserNotFound)?;

    let token = generate_token();
    let expires_at = (Utc::now() + Duration::hours(VERIFICATION_TOKEN_TTL_HOURS)).fixed_offset();

    let updated = user_adapter
        .replace_verification_request(
            user.email.clone(),
            VerificationRequestParams {
                token: token.clone(),
                expires_at,
                website_url,
            },
        )
        .await
        .map_err(verification_error_500)?;
    if updated == 0 {
        return Err(WebsiteVerificationError::UserNotFound);
    }

    mailer
        .send_website_verification(WebsiteVerificationEmail {
            recipient_email: user.email,
            recipient_name: user.name,
            website_url: canonical_url.clone(),
            verification_link: format!(
                "{}/{}",
                verification_link_base.trim_end_matches('/'),
                token
            ),
            expires_at,
        })
        .await
        .map_err(WebsiteVerificationError::EmailDeliveryFailed)?;

    Ok(WebsiteVerificationIssued {
        website_url: canonical_url,
        expires_at,
    })
}

fn generate_token() -> String {
    let mut buff = [0_u8; VERIFICATION_TOKEN_BYTES];
    OsRng.fill_bytes(&mut buff);
    hex::encode(buff)
}
