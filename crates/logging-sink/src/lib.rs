#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the pieces needed to route informational output
//! through a single swappable binding and to silence that binding for the
//! duration of a callback.
//!
//! # Design
//!
//! A sink is anything implementing [`LogSink`]; closures qualify. Sinks are
//! shared as [`SharedSink`] (`Arc<dyn LogSink>`) and bound in a [`SinkSlot`].
//! [`SinkSlot::suppress`] binds the slot's private [`NoopSink`], runs the
//! callback, and binds the original sink again through a [`SuppressGuard`]
//! whose `Drop` performs the restoration. [`WriterSink`] adapts any
//! [`std::io::Write`] target, honouring a [`LineMode`].
//!
//! # Invariants
//!
//! - After [`SinkSlot::suppress`] returns or unwinds, the slot holds the same
//!   [`SharedSink`] allocation it held before the call.
//! - [`SinkSlot::is_suppressed`] is true only while the slot's own no-op sink
//!   is bound.
//! - Suppression never reaches another [`SinkSlot`].
//!
//! # Errors
//!
//! Emission surfaces [`std::io::Error`] values from the bound sink. The
//! suppressor defines no errors of its own; whatever the callback returns is
//! handed back untouched.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{SinkSlot, WriterSink, shared};
//!
//! let slot = SinkSlot::new(shared(WriterSink::new(Vec::new())));
//!
//! let value = slot.suppress(|| {
//!     slot.emit("hidden").expect("noop never fails");
//!     42
//! });
//! assert_eq!(value, 42);
//! assert!(!slot.is_suppressed());
//! ```
//!
//! # See also
//!
//! - `logging` crate for the ambient process-wide slot, `devnull`, and the
//!   `info_log!` macro.

mod line_mode;
mod sink;
mod slot;

pub use line_mode::LineMode;
pub use sink::{LogSink, NoopSink, SharedSink, SuppressGuard, WriterSink, same_sink, shared};
pub use slot::SinkSlot;
