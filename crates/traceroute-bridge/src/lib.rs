//! Bridge adapter for the native traceroute plugin.
//!
//! This crate is a parameter-marshaling shim: it translates two typed trace
//! calls into a single generic "invoke native operation" dispatch and relays
//! the native success/error callbacks back to the caller unchanged. The
//! probing engine itself (TTL iteration, RTT measurement, hop resolution)
//! lives entirely behind the [`NativeInvoker`] boundary and is never
//! implemented here.
//!
//! - [`BridgeAdapter`] — the two public trace calls, plus awaitable variants
//! - [`NativeInvoker`] — the injected native dispatch capability
//! - [`TraceRequest`] — per-call dispatch parameters
//! - [`BridgeError`] — failures surfaced by the awaitable calls

pub mod adapter;
pub mod error;
pub mod invoker;
pub mod types;

pub use adapter::BridgeAdapter;
pub use error::{BridgeError, BridgeResult};
pub use invoker::{FailureHandler, NativeInvoker, SuccessHandler};
pub use types::{TraceRequest, DEFAULT_MAX_HOPS, PLUGIN_ACTION, PLUGIN_SERVICE};
