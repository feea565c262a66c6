//! Core types for trace dispatch.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Target component id registered by the native traceroute plugin.
pub const PLUGIN_SERVICE: &str = "CDVTraceRT";

/// Operation name the native plugin exposes. Both public calls map to it.
pub const PLUGIN_ACTION: &str = "startTrace";

/// Hop limit used when the caller does not supply one.
pub const DEFAULT_MAX_HOPS: i32 = 30;

/// Parameters for a single trace dispatch.
///
/// Created per call and discarded after dispatch. No validation is
/// performed: an empty host or a non-positive hop limit passes through to
/// the native layer uninspected, and the native error contract governs
/// whatever comes back on the failure handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRequest {
    /// Target hostname or IP address.
    pub host: String,
    /// Maximum number of router traversals (TTL) the probe will attempt.
    pub max_hops: i32,
}

impl TraceRequest {
    /// Creates a request with the default hop limit of 30.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    /// Creates a request with a caller-supplied hop limit.
    pub fn with_max_hops(host: impl Into<String>, max_hops: i32) -> Self {
        Self {
            host: host.into(),
            max_hops,
        }
    }

    /// The ordered positional argument list handed to the native dispatch.
    pub fn to_args(&self) -> Vec<Value> {
        vec![json!(self.host), json!(self.max_hops)]
    }
}
