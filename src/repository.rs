//! Board repository — upstream fetch and payload normalization.
//!
//! DESIGN
//! ======
//! Thin HTTP wrapper around the configured board list endpoint. Wire
//! shapes are normalized here, before the controller ever sees them:
//! the endpoint may return the board array bare, or wrapped in a
//! single-key envelope object. Pure decoding in `decode_boards` for
//! testability.
//!
//! A failed fetch is terminal for that attempt; no retry or backoff.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::model::Board;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by board repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the board endpoint failed.
    #[error("board fetch failed: {0}")]
    Request(String),

    /// The endpoint returned a non-success HTTP status.
    #[error("board fetch error: status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded as a board list.
    #[error("board payload decode failed: {0}")]
    Decode(String),

    /// The response envelope did not hold exactly one board list.
    #[error("board payload envelope has {keys} keys, expected exactly one")]
    Envelope { keys: usize },
}

// =============================================================================
// CLIENT
// =============================================================================

/// Repository client timeouts, loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl RepositoryTimeouts {
    /// Read `BOARDS_FETCH_TIMEOUT_SECS` / `BOARDS_CONNECT_TIMEOUT_SECS`,
    /// falling back to the defaults on absent or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse("BOARDS_FETCH_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("BOARDS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl Default for RepositoryTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Client for the upstream board list endpoint.
pub struct BoardRepository {
    http: reqwest::Client,
    url: String,
}

impl BoardRepository {
    /// Build a repository client for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: String, timeouts: RepositoryTimeouts) -> Result<Self, RepositoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RepositoryError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    /// Fetch and normalize the board list.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the endpoint answers
    /// with a non-success status, or the payload cannot be decoded.
    pub async fn fetch_boards(&self) -> Result<Vec<Board>, RepositoryError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RepositoryError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RepositoryError::Request(e.to_string()))?;

        if status != 200 {
            return Err(RepositoryError::Status { status, body: text });
        }

        decode_boards(&text)
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Accepted wire shapes for the board list payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoardsPayload {
    Bare(Vec<Board>),
    Envelope(BTreeMap<String, Vec<Board>>),
}

/// Normalize the wire payload into the canonical board list. Accepts a
/// bare JSON array, or an object with exactly one key whose value is
/// the array (the envelope shape some backends emit).
///
/// # Errors
///
/// Returns a decode error for any other shape, and an envelope error
/// when the object holds zero or several keys.
pub fn decode_boards(json: &str) -> Result<Vec<Board>, RepositoryError> {
    let payload: BoardsPayload =
        serde_json::from_str(json).map_err(|e| RepositoryError::Decode(e.to_string()))?;

    match payload {
        BoardsPayload::Bare(boards) => Ok(boards),
        BoardsPayload::Envelope(mut map) => {
            if map.len() != 1 {
                return Err(RepositoryError::Envelope { keys: map.len() });
            }
            Ok(map.pop_first().map(|(_, boards)| boards).unwrap_or_default())
        }
    }
}

#[cfg(test)]
#[path = "repository_test.rs"]
mod tests;
