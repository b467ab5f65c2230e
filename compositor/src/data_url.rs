//! `data:` URL helpers for uploaded images.
//!
//! Uploads never leave the browser: the picked file is turned into a
//! base64 `data:` URL which doubles as the `<img src>` for the on-screen
//! overlay and as the byte source for export.

#[cfg(test)]
#[path = "data_url_test.rs"]
mod data_url_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DataUrlError {
    /// The string does not start with `data:`.
    #[error("not a data URL")]
    MissingScheme,
    /// No `,` separates the header from the payload.
    #[error("data URL has no payload separator")]
    MissingPayload,
    /// Only base64 payloads are produced by uploads.
    #[error("data URL payload is not base64-encoded")]
    NotBase64,
    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(String),
}

/// Build a `data:<mime>;base64,<payload>` URL.
///
/// An empty `mime` falls back to `application/octet-stream`.
#[must_use]
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode the payload bytes of a base64 `data:` URL.
///
/// # Errors
///
/// Returns a [`DataUrlError`] when the URL is not a base64 `data:` URL or the
/// payload fails to decode.
pub fn decode(url: &str) -> Result<Vec<u8>, DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;
    if !header.split(';').any(|part| part.eq_ignore_ascii_case("base64")) {
        return Err(DataUrlError::NotBase64);
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|e| DataUrlError::Base64(e.to_string()))
}
