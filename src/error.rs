//! Error types for pubplans
//!
//! Every network operation in this crate surfaces one of three failure kinds:
//! a transport-level failure, a non-success HTTP status, or a response body
//! that does not match the expected schema. There is no retry at any layer; a
//! single failed attempt is reported upward immediately.

use thiserror::Error;

/// Result type alias for pubplans operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pubplans
///
/// Each variant carries enough context to identify the failing request.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure: unreachable host, timeout, or request build failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code
    #[error("unexpected HTTP status {status} from {url}")]
    BadStatus {
        /// The HTTP status code returned by the server
        status: reqwest::StatusCode,
        /// The URL that was requested
        url: String,
    },

    /// A URL could not be composed from the configured origin
    #[error("cannot build request URL from origin {origin}: {source}")]
    InvalidOrigin {
        /// The origin that failed to serve as a base URL
        origin: String,
        /// The underlying URL parse error
        #[source]
        source: url::ParseError,
    },

    /// The response body did not match the expected schema
    ///
    /// Absent or null optional fields are never a decode failure; this fires
    /// only on a genuine shape mismatch (wrong type, malformed JSON).
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The URL whose response failed to decode
        url: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bad_status_display_includes_status_and_url() {
        let err = Error::BadStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://api.fantlab.ru/work/1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://api.fantlab.ru/work/1"));
    }

    #[test]
    fn decode_error_preserves_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode {
            url: "https://api.fantlab.ru/pubplans?pub_id=33".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("failed to decode response"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
