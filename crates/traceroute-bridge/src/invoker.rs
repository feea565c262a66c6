//! The native dispatch boundary.

use serde_json::Value;
use std::sync::Arc;

/// Handler invoked with the trace results when the native probe succeeds.
pub type SuccessHandler = Arc<dyn Fn(Value) + Send + Sync>;

/// Handler invoked with an error description when the native probe fails.
pub type FailureHandler = Arc<dyn Fn(Value) + Send + Sync>;

/// Generic invocation capability for the native plugin layer.
///
/// An implementation marshals the named operation and its positional
/// arguments to the native side, then routes the response back through
/// exactly one of the two handlers, exactly once per call, on a thread of
/// its choosing. `invoke` returns immediately: it never blocks and never
/// fails locally.
///
/// The adapter holds this as an injected trait object, so tests substitute
/// a recording or replying double where production code supplies the real
/// plugin bridge.
pub trait NativeInvoker: Send + Sync {
    /// Dispatches one native operation.
    fn invoke(
        &self,
        on_success: SuccessHandler,
        on_failure: FailureHandler,
        service: &str,
        action: &str,
        args: Vec<Value>,
    );
}
