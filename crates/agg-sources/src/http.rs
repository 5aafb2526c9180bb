//! Reading collection endpoint responses.
//!
//! An endpoint answers with a JSON array of record objects. Anything else,
//! including throttling, is turned into a [`SourceError`] here so that
//! [`HttpSource`](crate::HttpSource) only has to build the request.

use agg_core::Record;
use reqwest::StatusCode;

use crate::error::SourceError;

/// Wait suggested when a throttled endpoint gives no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Turn a collection endpoint's response into records.
///
/// # Errors
///
/// Any error of [`check_response`] or [`parse_records`], or
/// [`SourceError::Http`] if the body cannot be read.
pub async fn read_records(resp: reqwest::Response) -> Result<Vec<Record>, SourceError> {
    let resp = check_response(resp).await?;
    let body = resp.text().await?;
    parse_records(&body)
}

/// Pass a 2xx response through; map every other status to an error.
///
/// Throttling (429) yields [`SourceError::RateLimited`] carrying the wait
/// from a numeric `Retry-After`. Other failures become [`SourceError::Api`]
/// with the response text as the message.
///
/// # Errors
///
/// See above.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(SourceError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        status => Err(SourceError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Whole seconds from `Retry-After`. HTTP dates are not interpreted.
fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Decode a response body into records.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] unless the body is a JSON array of
/// objects.
pub fn parse_records(body: &str) -> Result<Vec<Record>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;
    agg_core::records_from_value(value).map_err(|e| SourceError::Parse(e.to_string()))
}
