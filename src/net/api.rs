//! HTTP helpers for the row source and the product photo.
//!
//! Browser (`csr`): real requests via `gloo-net`.
//! Native builds (tests): the request functions return an error, while URL
//! building and body parsing stay pure and testable.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`FetchError`] whose `Display` text is what the table
//! shows in its error view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DataRow, RowsResponse};

/// Shown when an exception carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "An error occurred";

/// Error returned by [`fetch_rows`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error(
        "Failed to fetch data (HTTP {0}). The endpoint may be down or may not allow cross-origin requests from this page."
    )]
    Status(u16),
    /// The request never produced a response.
    #[error("{}", or_generic(.0))]
    Network(String),
    /// The body was not the expected JSON.
    #[error("{}", or_generic(.0))]
    Decode(String),
    /// The configured endpoint could not be combined with the query.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

fn or_generic(message: &str) -> &str {
    if message.trim().is_empty() { GENERIC_FETCH_ERROR } else { message }
}

/// URL for a row fetch.
///
/// Without a search term the bare endpoint is requested and the server picks
/// its default page size. With a term, `paginate` and `search` are appended.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if `endpoint` is not an absolute URL.
pub fn rows_url(endpoint: &str, search_term: &str, rows_per_page: usize) -> Result<String, FetchError> {
    if search_term.is_empty() {
        return Ok(endpoint.to_owned());
    }
    let mut url = url::Url::parse(endpoint).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("paginate", &rows_per_page.to_string())
        .append_pair("search", search_term);
    Ok(url.into())
}

/// Decode a row-listing body.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not valid JSON of the
/// expected shape.
pub fn parse_rows(body: &str) -> Result<Vec<DataRow>, FetchError> {
    serde_json::from_str::<RowsResponse>(body)
        .map(|r| r.data)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Issue `GET url` and decode the row collection.
///
/// # Errors
///
/// Returns a [`FetchError`] on network failure, non-2xx status, or a body
/// that fails to decode.
pub async fn fetch_rows(url: &str) -> Result<Vec<DataRow>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        parse_rows(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FetchError::Network(format!("cannot fetch {url} outside the browser")))
    }
}

/// Download raw bytes, used for the product photo at export time.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is non-2xx.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(format!("cannot fetch {url} outside the browser"))
    }
}
