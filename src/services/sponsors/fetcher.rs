use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::sponsor::SponsorRecord;

/// Failure kinds for a sponsor fetch. The panel collapses all of them
/// into one generic failed state; the kinds exist for logs and tests.
#[derive(Debug, Error)]
pub enum SponsorFetchError {
    #[error("sponsor endpoint must use HTTPS")]
    InsecureUrl,
    #[error("sponsor endpoint returned HTTP status {0}")]
    BadStatus(StatusCode),
    #[error("sponsor response too large ({got} bytes > {limit} bytes)")]
    OversizedResponse { got: usize, limit: usize },
}

pub struct SponsorFetcher {
    client: Client,
    max_response_bytes: usize,
}

impl SponsorFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build sponsor HTTP client")?;

        Ok(Self {
            client,
            max_response_bytes: 1024 * 1024,
        })
    }

    /// One GET against the ad endpoint. No retries: the panel treats
    /// the first outcome as terminal for the current activation.
    pub fn fetch_sponsors(&self, url: &str) -> Result<Vec<SponsorRecord>> {
        if !url.starts_with("https://") {
            return Err(SponsorFetchError::InsecureUrl.into());
        }

        let response = self
            .client
            .get(url)
            .send()
            .context("Network error during sponsor fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SponsorFetchError::BadStatus(status).into());
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(SponsorFetchError::OversizedResponse {
                    got: content_length as usize,
                    limit: self.max_response_bytes,
                }
                .into());
            }
        }

        let bytes = response
            .bytes()
            .context("Failed to read sponsor response body")?;

        if bytes.len() > self.max_response_bytes {
            return Err(SponsorFetchError::OversizedResponse {
                got: bytes.len(),
                limit: self.max_response_bytes,
            }
            .into());
        }

        Self::decode_records(&bytes)
    }

    fn decode_records(bytes: &[u8]) -> Result<Vec<SponsorRecord>> {
        serde_json::from_slice(bytes).context("Sponsor response is not a JSON record array")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_http_urls_are_rejected() {
        let fetcher = SponsorFetcher::new().unwrap();

        let err = fetcher
            .fetch_sponsors("http://d1gl9g4ciwvjfq.cloudfront.net/api/GetDevhuntAds")
            .unwrap_err();

        assert!(err.downcast_ref::<SponsorFetchError>().is_some());
    }

    #[test]
    fn decode_accepts_an_array_of_records() {
        let body = br#"[{"type":"Sponsor","link":"https://x.dev","title":"X","description":"d","features":[],"callToAction":"Go"}]"#;

        let records = SponsorFetcher::decode_records(body).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "X");
    }

    #[test]
    fn decode_rejects_a_non_array_body() {
        let body = br#"{"error":"nope"}"#;

        assert!(SponsorFetcher::decode_records(body).is_err());
    }
}
