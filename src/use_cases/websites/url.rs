use std::fmt;

use url::Url;

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidWebsiteUrl(pub String);

impl fmt::Display for InvalidWebsiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid website url.", self.0)
    }
}

/// Reduces a website url to the key websites are stored under:
/// the lowercased host without scheme, `www.`, port, path, query or fragment.
pub fn canonicalize_website_url(input: &str) -> Result<String, InvalidWebsiteUrl> {
    let invalid = || InvalidWebsiteUrl(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    let parsed = Url::parse(&with_scheme).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }

    let host = parsed
        .host_str()
        .ok_or_else(invalid)?
        .trim_end_matches('.')
        .to_lowercase();
    let mut host = host.as_str();
    while let Some(rest) = host.strip_prefix("www.") {
        host = rest;
    }
    if host.is_empty() {
        return Err(invalid());
    }
    Ok(host.to_string())
}
