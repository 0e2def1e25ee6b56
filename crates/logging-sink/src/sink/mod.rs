use std::fmt;
use std::io;
use std::sync::Arc;

mod guard;
mod writer;

pub use guard::SuppressGuard;
pub use writer::WriterSink;

/// Destination for informational log lines.
///
/// A sink receives one fully formatted line per call. Any closure with the
/// signature `Fn(&str) -> io::Result<()>` that is `Send + Sync` is a sink, so
/// ad-hoc destinations do not need a dedicated type.
///
/// # Examples
///
/// ```
/// use logging_sink::LogSink;
///
/// let sink = |line: &str| -> std::io::Result<()> {
///     assert_eq!(line, "hello");
///     Ok(())
/// };
/// sink.emit("hello")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait LogSink: Send + Sync {
    /// Emits a single line.
    fn emit(&self, line: &str) -> io::Result<()>;
}

impl<F> LogSink for F
where
    F: Fn(&str) -> io::Result<()> + Send + Sync,
{
    fn emit(&self, line: &str) -> io::Result<()> {
        self(line)
    }
}

/// Reference-counted sink as stored in a [`SinkSlot`](crate::SinkSlot).
///
/// Two bindings hold "the same sink" when their [`SharedSink`] values point at
/// the same allocation; see [`same_sink`].
pub type SharedSink = Arc<dyn LogSink>;

/// Wraps a sink value into a [`SharedSink`].
pub fn shared<S>(sink: S) -> SharedSink
where
    S: LogSink + 'static,
{
    Arc::new(sink)
}

/// Reports whether two shared sinks are the same allocation.
///
/// Equality is by identity, not behaviour: two distinct [`NoopSink`]
/// allocations are different sinks.
#[must_use]
pub fn same_sink(a: &SharedSink, b: &SharedSink) -> bool {
    Arc::ptr_eq(a, b)
}

/// Sink that accepts every line and does nothing with it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn emit(&self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for NoopSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("noop")
    }
}
