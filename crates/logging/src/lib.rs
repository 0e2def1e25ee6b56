#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` owns the ambient, process-wide sink binding that informational
//! output goes through, together with [`devnull`], which silences that binding
//! for the duration of a callback.
//!
//! # Design
//!
//! The ambient binding is an ordinary [`SinkSlot`](logging_sink::SinkSlot)
//! created on first use and bound to standard output. [`info_log!`] formats a
//! line and emits it through [`emit`]. [`init`] rebinds the slot from a
//! [`SinkConfig`]. With the `tracing` feature, [`SinkLayer`] forwards tracing
//! events into a slot so they are silenced by the same mechanism.
//!
//! Components that must not be affected by other code's suppression should
//! hold their own `SinkSlot` instead of the ambient one.
//!
//! # Examples
//!
//! ```
//! use logging::{devnull, info_log, is_suppressed};
//!
//! let total = devnull(|| {
//!     info_log!("working quietly");
//!     assert!(is_suppressed());
//!     2 + 2
//! });
//! assert_eq!(total, 4);
//! assert!(!is_suppressed());
//! ```

mod ambient;
mod config;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use ambient::{
    ambient, ambient_shared, current_sink, devnull, emit, init, is_suppressed, set_sink,
    suppressed,
};
pub use config::{ParseSinkTargetError, SinkConfig, SinkTarget};
pub use logging_sink::{LineMode, SharedSink, SuppressGuard};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{SinkLayer, init_tracing, init_tracing_with_filter};
