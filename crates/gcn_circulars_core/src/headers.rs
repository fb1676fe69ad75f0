//! HTTP header composition for the web layer.
//!
//! # Responsibility
//! - Compose cache, canonical-link and Basic auth header pairs as
//!   `(name, value)` tuples, free of any framework types.
//!
//! # Invariants
//! - Basic auth usernames must not contain `:`, the separator reserved by
//!   the credential encoding (RFC 7617).
//! - Credential composition fails loudly instead of silently mis-encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cache header for static, long-lived data.
pub const PUBLIC_STATIC_CACHE_CONTROL: (&str, &str) =
    ("Cache-Control", "public, max-age=315360000");

pub type HeaderResult<T> = Result<T, HeaderError>;

/// Header composition error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Basic auth username contains the reserved `:` separator.
    UsernameContainsColon(String),
}

impl Display for HeaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameContainsColon(value) => {
                write!(f, "usernames for basic auth must not contain colons: `{value}`")
            }
        }
    }
}

impl Error for HeaderError {}

/// Header declaring the canonical URL to search engines; the HTTP
/// equivalent of the HTML `<link rel="canonical">` tag.
pub fn canonical_url_headers(url: &str) -> (&'static str, String) {
    ("Link", format!("<{url}>; rel=\"canonical\""))
}

/// HTTP Basic auth request header for a username and password (RFC 7617).
///
/// # Errors
/// - [`HeaderError::UsernameContainsColon`] when the username contains the
///   `:` separator, which would make the encoded credentials ambiguous.
pub fn basic_auth_headers(username: &str, password: &str) -> HeaderResult<(&'static str, String)> {
    if username.contains(':') {
        return Err(HeaderError::UsernameContainsColon(username.to_string()));
    }
    let userpass = STANDARD.encode(format!("{username}:{password}"));
    Ok(("Authorization", format!("Basic {userpass}")))
}
