use chrono::{DateTime, FixedOffset, Utc};

use crate::user;

/// The verification request embedded in a user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    pub token: String,
    pub expires_at: DateTime<FixedOffset>,
    pub website_url: String,
}

impl PendingVerification {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

pub trait UserVerificationTrait {
    fn pending_verification(&self) -> Option<PendingVerification>;
}

impl UserVerificationTrait for user::Model {
    fn pending_verification(&self) -> Option<PendingVerification> {
        match (
            &self.verification_token,
            self.verification_expires_at,
            &self.verification_website_url,
        ) {
            (Some(token), Some(expires_at), Some(website_url)) => Some(PendingVerification {
                token: token.clone(),
                expires_at,
                website_url: website_url.clone(),
            }),
            _ => None,
        }
    }
}
