use std::{fmt, future::Future};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub const VERIFICATION_TOKEN_TTL_HOURS: i64 = 24;
pub const VERIFICATION_TOKEN_BYTES: usize = 32;

#[derive(Debug, PartialEq)]
pub enum WebsiteVerificationError {
    Unauthenticated,
    UserNotFound,
    InvalidWebsiteUrl(String),
    InvalidOrExpiredToken,
    WebsiteNotFound,
    EmailDeliveryFailed(String),
    InternalServerError(String),
}

impl WebsiteVerificationError {
    /// Short machine-readable reason, used in redirect query strings.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::UserNotFound => "user_not_found",
            Self::InvalidWebsiteUrl(_) => "invalid_website_url",
            Self::InvalidOrExpiredToken => "invalid_or_expired_token",
            Self::WebsiteNotFound => "website_not_found",
            Self::EmailDeliveryFailed(_) => "email_delivery_failed",
            Self::InternalServerError(_) => "internal_server_error",
        }
    }
}

impl fmt::Display for WebsiteVerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "You are not logged in."),
            Self::UserNotFound => write!(f, "User with this email was not found."),
            Self::InvalidWebsiteUrl(url) => write!(f, "{} is not a valid website url.", url),
            Self::InvalidOrExpiredToken => write!(
                f,
                "This verification link is invalid or has expired. Kindly request a new one."
            ),
            Self::WebsiteNotFound => write!(f, "The website to verify is not listed."),
            Self::EmailDeliveryFailed(_) => {
                write!(f, "We could not send the verification email. Please try again later.")
            }
            Self::InternalServerError(_) => {
                write!(f, "Some unexpected error happened. Please try again later.")
            }
        }
    }
}

pub(crate) fn verification_error_500(e: impl fmt::Debug) -> WebsiteVerificationError {
    WebsiteVerificationError::InternalServerError(format!("{:?}", e))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WebsiteVerificationRequest {
    pub website_url: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct WebsiteVerificationIssued {
    pub website_url: String,
    pub expires_at: DateTime<FixedOffset>,
}

/// Everything the outbound email needs; rendering is left to the mailer.
#[derive(Debug, Clone)]
pub struct WebsiteVerificationEmail {
    pub recipient_email: String,
    pub recipient_name: String,
    pub website_url: String,
    pub verification_link: String,
    pub expires_at: DateTime<FixedOffset>,
}

pub trait VerificationMailer {
    fn send_website_verification(
        &self,
        email: WebsiteVerificationEmail,
    ) -> impl Future<Output = Result<(), String>>;
}
