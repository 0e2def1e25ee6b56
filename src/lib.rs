#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Run a callback with informational log output silenced.
//!
//! [`devnull`] binds a no-op sink to the process-wide log slot, runs the
//! callback, binds the original sink again and hands back the callback's
//! result. The restoration happens on return and on panic.
//!
//! ```
//! use devnull::{devnull, info_log};
//!
//! let answer = devnull(|| {
//!     info_log!("hidden");
//!     42
//! });
//! info_log!("visible");
//! assert_eq!(answer, 42);
//! ```
//!
//! Code that should not share the process-wide binding injects its own
//! [`SinkSlot`] and calls [`SinkSlot::suppress`] on it.

pub use logging::{
    LineMode, ParseSinkTargetError, SharedSink, SinkConfig, SinkTarget, SuppressGuard, ambient,
    ambient_shared, current_sink, devnull, emit, info_log, init, is_suppressed, set_sink,
    suppressed,
};
#[cfg(feature = "tracing")]
pub use logging::{SinkLayer, init_tracing, init_tracing_with_filter};
pub use logging_sink::{LogSink, NoopSink, SinkSlot, WriterSink, same_sink, shared};
