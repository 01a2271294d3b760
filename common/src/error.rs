//! Error types shared by the console.
//!
//! `ApiError` covers every remote failure (transport, non-success status,
//! undecodable body). `EditorError` and `SubmitError` are local failures of
//! the nested collection editors and the submission coordinator.

use serde::Deserialize;
use thiserror::Error;

/// Message fragments the backend currently uses when it rejects a duplicate.
///
/// Not a stable contract: prefer the structured `code` once the backend sends it.
const DUPLICATE_MARKERS: [&str; 2] = ["already exists", "duplicate key"];

/// Structured error code that marks a duplicate conflict.
const DUPLICATE_CODE: &str = "DUPLICATE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Error body shape returned by the backend, e.g. `{"error": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error from a raw response, extracting the message and
    /// code from a JSON error body when there is one.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ApiError::Status {
                status,
                code: parsed.code,
                message: parsed
                    .error
                    .or(parsed.message)
                    .unwrap_or_else(|| body.trim().to_string()),
            },
            Err(_) => ApiError::Status {
                status,
                code: None,
                message: body.trim().to_string(),
            },
        }
    }

    /// Whether the backend rejected the request because the entry already exists.
    pub fn is_duplicate(&self) -> bool {
        match self {
            ApiError::Status {
                status,
                code,
                message,
            } => {
                if code.as_deref() == Some(DUPLICATE_CODE) {
                    return true;
                }
                matches!(status, 400 | 409)
                    && DUPLICATE_MARKERS
                        .iter()
                        .any(|marker| message.contains(marker))
            }
            _ => false,
        }
    }
}

/// Failures of a nested collection editor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("index {index} is out of range for a collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures that prevent a submission from being dispatched.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_body_is_unwrapped() {
        let err = ApiError::from_response(400, r#"{"error":"Title is too long"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                code: None,
                message: "Title is too long".to_string()
            }
        );
        assert!(!err.is_duplicate());
    }

    #[test]
    fn plain_text_body_is_kept_verbatim() {
        let err = ApiError::from_response(503, "  Service Unavailable\n");
        assert_eq!(err.to_string(), "server responded with 503: Service Unavailable");
    }

    #[test]
    fn duplicate_detected_from_message_markers() {
        let err = ApiError::from_response(
            400,
            r#"{"error":"E11000 duplicate key error collection: headings"}"#,
        );
        assert!(err.is_duplicate());

        let err = ApiError::from_response(400, r#"{"error":"Heading already exists"}"#);
        assert!(err.is_duplicate());
    }

    #[test]
    fn duplicate_markers_ignored_on_server_errors() {
        let err = ApiError::from_response(500, r#"{"error":"duplicate key"}"#);
        assert!(!err.is_duplicate());
    }

    #[test]
    fn structured_code_wins_over_message() {
        let err = ApiError::from_response(422, r#"{"code":"DUPLICATE","error":"rejected"}"#);
        assert!(err.is_duplicate());
    }

    #[test]
    fn transport_errors_are_never_duplicates() {
        assert!(!ApiError::Transport("offline".into()).is_duplicate());
    }
}
