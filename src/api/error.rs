//! Upstream API error types.
//!
//! Every failed call to the LocaBriques API is normalized into [`ApiError`],
//! a tagged enum handlers pattern-match instead of probing optional fields.
//! The `message` strings mirror the wording the upstream client has always
//! produced, since several tool families surface them verbatim.

use thiserror::Error;

/// Result type for upstream API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// A normalized failure from the LocaBriques API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server responded with a non-2xx status code.
    #[error("{message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Parsed JSON body of the error response, when one was returned.
        data: Option<serde_json::Value>,
        /// `LocaBriques API Error [<status>]: <detail>`
        message: String,
    },

    /// The request never produced a response (network failure, timeout) or
    /// could not be constructed at all.
    #[error("{message}")]
    Transport {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Fixed message for requests that were sent but got no response.
    pub const NO_RESPONSE: &'static str =
        "LocaBriques API Error: No response received from server";

    /// Build an HTTP error from a status code and optional JSON body.
    ///
    /// The detail is the body's `message` field when present, otherwise the
    /// status reason phrase.
    pub fn http(status: reqwest::StatusCode, data: Option<serde_json::Value>) -> Self {
        let detail = data
            .as_ref()
            .and_then(|d| d.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Self::Http {
            status: status.as_u16(),
            data,
            message: format!("LocaBriques API Error [{}]: {}", status.as_u16(), detail),
        }
    }

    /// Normalize a reqwest error into a transport error.
    pub fn transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Transport {
                message: Self::NO_RESPONSE.to_string(),
            }
        } else {
            Self::Transport {
                message: format!("LocaBriques API Error: {err}"),
            }
        }
    }

    /// The human-readable message for this failure.
    pub fn message(&self) -> &str {
        match self {
            Self::Http { message, .. } | Self::Transport { message } => message,
        }
    }

    /// HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// JSON body of the error response, if one was returned.
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http { data, .. } => data.as_ref(),
            Self::Transport { .. } => None,
        }
    }
}
