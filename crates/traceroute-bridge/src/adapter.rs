//! The bridge adapter: typed trace calls in, generic native dispatch out.

use crate::error::{BridgeError, BridgeResult};
use crate::invoker::{FailureHandler, NativeInvoker, SuccessHandler};
use crate::types::{TraceRequest, PLUGIN_ACTION, PLUGIN_SERVICE};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

/// Bridge adapter over the native traceroute plugin.
///
/// Stateless and re-entrant: concurrent traces are permitted and the
/// adapter imposes no ordering between them. Whether concurrent probes are
/// serialized, parallelized, or rejected is the native layer's policy.
///
/// Two call surfaces are offered. The callback surface
/// ([`start_trace`](Self::start_trace),
/// [`start_trace_with_hops`](Self::start_trace_with_hops)) forwards the
/// caller's handlers to the dispatch unchanged. The await surface
/// ([`trace`](Self::trace), [`trace_with_hops`](Self::trace_with_hops))
/// wraps the same dispatch in a oneshot channel so callers can compose the
/// result as a future.
#[derive(Clone)]
pub struct BridgeAdapter {
    invoker: Arc<dyn NativeInvoker>,
}

impl BridgeAdapter {
    /// Creates an adapter over the given native dispatch capability.
    pub fn new(invoker: Arc<dyn NativeInvoker>) -> Self {
        Self { invoker }
    }

    /// Starts a trace to `host` with the default hop limit of 30.
    ///
    /// Fire-and-forget: returns immediately. The native layer later invokes
    /// `on_success` with the trace results or `on_failure` with an error
    /// description, on a thread of its choosing. The handlers are forwarded
    /// as-is, never wrapped.
    pub fn start_trace(
        &self,
        host: &str,
        on_success: SuccessHandler,
        on_failure: FailureHandler,
    ) {
        self.dispatch(TraceRequest::new(host), on_success, on_failure);
    }

    /// Starts a trace with a caller-supplied hop limit.
    ///
    /// `max_hops` is passed through uninspected: a zero or negative limit
    /// reaches the native layer unchanged.
    pub fn start_trace_with_hops(
        &self,
        host: &str,
        max_hops: i32,
        on_success: SuccessHandler,
        on_failure: FailureHandler,
    ) {
        self.dispatch(
            TraceRequest::with_max_hops(host, max_hops),
            on_success,
            on_failure,
        );
    }

    /// Awaitable variant of [`start_trace`](Self::start_trace).
    pub async fn trace(&self, host: &str) -> BridgeResult<Value> {
        self.dispatch_awaited(TraceRequest::new(host)).await
    }

    /// Awaitable variant of
    /// [`start_trace_with_hops`](Self::start_trace_with_hops).
    pub async fn trace_with_hops(&self, host: &str, max_hops: i32) -> BridgeResult<Value> {
        self.dispatch_awaited(TraceRequest::with_max_hops(host, max_hops))
            .await
    }

    fn dispatch(
        &self,
        request: TraceRequest,
        on_success: SuccessHandler,
        on_failure: FailureHandler,
    ) {
        debug!(
            service = PLUGIN_SERVICE,
            action = PLUGIN_ACTION,
            host = %request.host,
            max_hops = request.max_hops,
            "Dispatching trace to native layer"
        );
        self.invoker.invoke(
            on_success,
            on_failure,
            PLUGIN_SERVICE,
            PLUGIN_ACTION,
            request.to_args(),
        );
    }

    async fn dispatch_awaited(&self, request: TraceRequest) -> BridgeResult<Value> {
        let (tx, rx) = oneshot::channel();
        // The native contract is exactly-once, but the handlers are plain
        // `Fn`, so the sender sits behind a Mutex<Option<..>> and the first
        // invocation wins.
        let tx = Arc::new(Mutex::new(Some(tx)));

        let success_tx = Arc::clone(&tx);
        let on_success: SuccessHandler = Arc::new(move |value| {
            if let Some(tx) = success_tx.lock().expect("sender mutex poisoned").take() {
                let _ = tx.send(Ok(value));
            }
        });

        let failure_tx = Arc::clone(&tx);
        let on_failure: FailureHandler = Arc::new(move |value| {
            if let Some(tx) = failure_tx.lock().expect("sender mutex poisoned").take() {
                let _ = tx.send(Err(BridgeError::Native(value)));
            }
        });

        self.dispatch(request, on_success, on_failure);

        // A dropped sender means the native layer discarded both handlers
        // without ever responding.
        rx.await.unwrap_or(Err(BridgeError::NoResponse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAX_HOPS;
    use serde_json::json;

    struct RecordedCall {
        service: String,
        action: String,
        args: Vec<Value>,
    }

    /// Records every dispatch without ever responding.
    struct RecordingInvoker {
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl RecordingInvoker {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl NativeInvoker for RecordingInvoker {
        fn invoke(
            &self,
            _on_success: SuccessHandler,
            _on_failure: FailureHandler,
            service: &str,
            action: &str,
            args: Vec<Value>,
        ) {
            self.calls.lock().expect("calls mutex poisoned").push(RecordedCall {
                service: service.to_string(),
                action: action.to_string(),
                args,
            });
        }
    }

    fn noop() -> SuccessHandler {
        Arc::new(|_| {})
    }

    #[test]
    fn test_start_trace_dispatches_default_hops() {
        let invoker = RecordingInvoker::new();
        let adapter = BridgeAdapter::new(Arc::clone(&invoker) as Arc<dyn NativeInvoker>);

        adapter.start_trace("example.com", noop(), noop());

        let calls = invoker.calls.lock().expect("calls mutex poisoned");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].service, PLUGIN_SERVICE);
        assert_eq!(calls[0].action, PLUGIN_ACTION);
        assert_eq!(
            calls[0].args,
            vec![json!("example.com"), json!(DEFAULT_MAX_HOPS)]
        );
    }

    #[test]
    fn test_start_trace_with_hops_dispatches_given_hops() {
        let invoker = RecordingInvoker::new();
        let adapter = BridgeAdapter::new(Arc::clone(&invoker) as Arc<dyn NativeInvoker>);

        adapter.start_trace_with_hops("10.0.0.1", 5, noop(), noop());

        let calls = invoker.calls.lock().expect("calls mutex poisoned");
        assert_eq!(calls[0].args, vec![json!("10.0.0.1"), json!(5)]);
    }

    #[test]
    fn test_repeated_calls_dispatch_independently() {
        let invoker = RecordingInvoker::new();
        let adapter = BridgeAdapter::new(Arc::clone(&invoker) as Arc<dyn NativeInvoker>);

        adapter.start_trace("example.com", noop(), noop());
        adapter.start_trace("example.com", noop(), noop());

        let calls = invoker.calls.lock().expect("calls mutex poisoned");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].args, calls[1].args);
    }

    #[test]
    fn test_non_positive_hops_pass_through() {
        let invoker = RecordingInvoker::new();
        let adapter = BridgeAdapter::new(Arc::clone(&invoker) as Arc<dyn NativeInvoker>);

        adapter.start_trace_with_hops("example.com", 0, noop(), noop());
        adapter.start_trace_with_hops("example.com", -7, noop(), noop());

        let calls = invoker.calls.lock().expect("calls mutex poisoned");
        assert_eq!(calls[0].args[1], json!(0));
        assert_eq!(calls[1].args[1], json!(-7));
    }
}
