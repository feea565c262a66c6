//! Error types for the bridge await surface.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the awaitable trace calls.
///
/// The callback surface performs no error translation at all: every native
/// failure reaches the caller's failure handler as the opaque value the
/// native layer produced. These variants exist only so the future-based
/// calls have a two-case result to resolve to.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The native layer invoked the failure handler with this value.
    #[error("native layer reported failure: {0}")]
    Native(Value),

    /// The native layer dropped both handlers without invoking either,
    /// breaking its exactly-once response contract.
    #[error("native layer dropped the trace callbacks without responding")]
    NoResponse,
}

/// Result type alias for the await surface.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_native_error_carries_value() {
        let err = BridgeError::Native(json!("host unreachable"));
        assert!(err.to_string().contains("host unreachable"));
    }

    #[test]
    fn test_no_response_display() {
        let err = BridgeError::NoResponse;
        assert!(err.to_string().contains("without responding"));
    }
}
