//! Upstream request errors

use std::fmt;
use std::fmt::Display;

/// Failure modes of a single upstream call
///
/// None of these escape the fetcher: each one resolves to the sentinel
/// snapshot (search) or to the publish time fallback (details).
#[derive(Debug)]
pub enum FetchError {
    /// Connection, TLS or body read failure
    Transport(String),

    /// Upstream answered with a non-2xx status
    Status(u16),

    /// Body was not the JSON shape we consume
    Decode(serde_json::Error),
}

impl std::error::Error for FetchError {}

impl Display for FetchError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(fmt, "transport error: {}", e),
            FetchError::Status(code) => write!(fmt, "upstream returned status {}", code),
            FetchError::Decode(e) => write!(fmt, "decode failed: {}", e),
        }
    }
}

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => FetchError::Status(code),
            ureq::Error::Transport(t) => FetchError::Transport(t.to_string()),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}
