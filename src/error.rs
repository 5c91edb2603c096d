//! Error types for the GLPI API client.
//!
//! This module defines `GlpiError`, the unified error type used throughout
//! the crate. Errors fall into three families:
//!
//! - **Configuration errors**, raised by [`crate::config::Config::validate`]
//!   before a client is ever constructed.
//! - **Validation errors**, raised synchronously before any network call
//!   (bad item types, malformed parameters, missing HATEOAS links, ...).
//! - **Server errors**, raised after a round-trip, carrying the upstream
//!   HTTP status code and the two-element `[message, comment]` error body
//!   GLPI returns on failure.

use thiserror::Error;

/// Unified error type for all GLPI client operations.
///
/// Validation variants are produced before any request is dispatched, so a
/// caller observing one can be certain no network traffic happened.
#[derive(Error, Debug)]
pub enum GlpiError {
    /// Neither a user token nor a complete username/password pair was given.
    #[error("missing authorization: provide a user token or a username/password pair")]
    MissingAuthorization,

    /// No app token was given.
    #[error("missing App-Token")]
    MissingAppToken,

    /// No API URL was given.
    #[error("missing API URL")]
    MissingApiUrl,

    /// The API URL did not parse as a well-formed URL.
    #[error("invalid API URL: {url}")]
    InvalidApiUrl {
        /// The offending URL string.
        url: String,
    },

    /// An item type was required but empty or absent.
    #[error("missing item type")]
    MissingItemType,

    /// The item type is not in the allowed item-type list.
    #[error("invalid item type: {name}")]
    InvalidItemType {
        /// The rejected type name.
        name: String,
    },

    /// A parameter failed validation before the request was built.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// What was wrong with the input.
        reason: String,
    },

    /// A HATEOAS `links` array was required but absent or incomplete.
    #[error("missing HATEOAS: {reason}")]
    MissingHateoas {
        /// Which part of the link lookup failed.
        reason: String,
    },

    /// The HTTP method is not one of GET/POST/PUT/DELETE.
    #[error("invalid HTTP method: {method}")]
    InvalidHttpMethod {
        /// The rejected method.
        method: String,
    },

    /// The file passed to the upload operation could not be read.
    #[error("file not readable: {path}")]
    FileNotReadable {
        /// Path that could not be accessed.
        path: String,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// `kill_session` was called while no session was active.
    #[error("session not found: no active session to kill")]
    SessionNotFound,

    /// JSON serialization failed while building a request.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The GLPI server rejected the request, or the transport failed.
    ///
    /// `code` is the upstream HTTP status, or 500 when the failure happened
    /// before any response was received. `message` is element 0 of the
    /// two-element error body (a machine code on current API versions) and
    /// `comment` is element 1 (the human-readable explanation), when present.
    #[error("server error {code}: {message}")]
    Server {
        /// Upstream HTTP status code (500 for pure transport failures).
        code: u16,
        /// Element 0 of the error body, or the raw body/transport message.
        message: String,
        /// Element 1 of the error body, if present.
        comment: Option<String>,
    },
}

impl GlpiError {
    /// Creates an invalid-parameter error.
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        GlpiError::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Creates a missing-HATEOAS error.
    pub fn missing_hateoas(reason: impl Into<String>) -> Self {
        GlpiError::MissingHateoas {
            reason: reason.into(),
        }
    }

    /// Creates a server error from an HTTP status and a parsed response body.
    ///
    /// GLPI error bodies are two-element JSON arrays `[message, comment]`.
    /// Bodies in any other shape are carried verbatim as the message.
    pub fn server_from_body(code: u16, body: &serde_json::Value) -> Self {
        if let Some(parts) = body.as_array() {
            let message = parts
                .first()
                .map(value_to_message)
                .unwrap_or_else(|| "unknown server error".to_string());
            let comment = parts.get(1).map(value_to_message);
            return GlpiError::Server {
                code,
                message,
                comment,
            };
        }

        GlpiError::Server {
            code,
            message: value_to_message(body),
            comment: None,
        }
    }

    /// Creates a server error for a transport failure with no response.
    pub fn transport(err: &reqwest::Error) -> Self {
        GlpiError::Server {
            code: 500,
            message: err.to_string(),
            comment: None,
        }
    }

    /// Upstream status code for server errors, `None` for local errors.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            GlpiError::Server { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if the error was raised before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, GlpiError::Server { .. })
    }
}

/// Renders a JSON value as an error message without quoting plain strings.
fn value_to_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_from_two_element_body() {
        let body = json!(["ERROR_SESSION_TOKEN_INVALID", "session_token semble incorrect"]);
        let err = GlpiError::server_from_body(401, &body);
        match err {
            GlpiError::Server {
                code,
                message,
                comment,
            } => {
                assert_eq!(code, 401);
                assert_eq!(message, "ERROR_SESSION_TOKEN_INVALID");
                assert_eq!(comment.as_deref(), Some("session_token semble incorrect"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_server_from_single_element_body() {
        let body = json!(["ERROR_ONLY"]);
        let err = GlpiError::server_from_body(400, &body);
        match err {
            GlpiError::Server {
                message, comment, ..
            } => {
                assert_eq!(message, "ERROR_ONLY");
                assert!(comment.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_server_from_non_array_body() {
        let body = json!({"detail": "boom"});
        let err = GlpiError::server_from_body(500, &body);
        match err {
            GlpiError::Server {
                code,
                message,
                comment,
            } => {
                assert_eq!(code, 500);
                assert!(message.contains("boom"));
                assert!(comment.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_server_comment_can_be_structured() {
        // Partial-failure bodies carry per-item results as the comment element.
        let body = json!(["ERROR_GLPI_PARTIAL_UPDATE", [{"42": true}]]);
        let err = GlpiError::server_from_body(400, &body);
        match err {
            GlpiError::Server { comment, .. } => {
                assert!(comment.unwrap().contains("42"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = GlpiError::invalid_parameter("id is required");
        assert_eq!(err.to_string(), "invalid parameter: id is required");
    }

    #[test]
    fn test_is_validation() {
        assert!(GlpiError::MissingItemType.is_validation());
        assert!(GlpiError::invalid_parameter("x").is_validation());
        let server = GlpiError::Server {
            code: 401,
            message: "nope".into(),
            comment: None,
        };
        assert!(!server.is_validation());
        assert_eq!(server.code(), Some(401));
    }
}
