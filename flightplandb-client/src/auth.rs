//! Credential header construction.
//!
//! The service authenticates with HTTP Basic Auth, using the API key as the
//! username and an empty password. Public endpoints accept requests without
//! any `Authorization` header at all, which is why the client leaves the
//! header off entirely when it holds no key.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Builds a Basic Auth header value from an API key.
///
/// Pure function; the key travels as the username with an empty password.
pub fn basic_auth_header(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{api_key}:")))
}
