use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform failure payload produced by the REST client.
///
/// Reducers store this verbatim; nothing in the state layer throws or
/// interprets it. Rendering (and any retry decision) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct RestClientError {
    /// True when a write may have been applied despite the error.
    pub in_doubt: bool,
    pub message: String,
}

impl RestClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            in_doubt: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_message() {
        let err = RestClientError::new("namespace not found");
        assert_eq!(err.to_string(), "namespace not found");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let err = RestClientError {
            in_doubt: true,
            message: "timeout".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"inDoubt":true,"message":"timeout"}"#);

        let back: RestClientError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
