use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

const MAX_ERROR_BODY: usize = 200;

/// Raw response of a provider call. Non-2xx statuses are not errors at this
/// level since Yahoo reports unknown symbols as a 404 with a JSON body.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn status_error(&self) -> FetchError {
        FetchError::Status {
            status: self.status,
            message: truncate(self.body.trim(), MAX_ERROR_BODY),
        }
    }
}

pub async fn make_request(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<RawResponse, FetchError> {
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(e, timeout))?;

    let status = res.status().as_u16();
    let body = res
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(e, timeout))?;

    Ok(RawResponse { status, body })
}

/// Decodes a provider body. A body that does not decode on a failed status is
/// reported as that status rather than as malformed JSON.
pub fn parse_response_object<T>(response: &RawResponse) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    match serde_json::from_str::<T>(&response.body) {
        Ok(data) => Ok(data),
        Err(_) if !response.is_success() => Err(response.status_error()),
        Err(e) => Err(FetchError::from(e)),
    }
}

pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
