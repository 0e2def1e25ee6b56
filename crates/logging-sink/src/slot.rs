use std::fmt;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use crate::sink::{NoopSink, SharedSink, SuppressGuard, WriterSink, same_sink, shared};

/// Swappable binding holding the sink that informational output goes to.
///
/// Code that logs reads the slot at emission time, so replacing the sink
/// redirects every later line. Each slot owns a private [`NoopSink`] instance
/// that [`suppress`](Self::suppress) installs; identity with that instance is
/// what [`is_suppressed`](Self::is_suppressed) reports.
///
/// Slots are meant to be injected: components that hold their own slot never
/// observe suppression performed on another one. The swap of the stored
/// pointer is atomic, but a capture/replace/restore sequence is not. Two
/// overlapping suppressions of one shared slot on different threads race, and
/// whichever restores last decides the final sink.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging_sink::{SinkSlot, WriterSink, shared};
///
/// let slot = SinkSlot::new(shared(WriterSink::new(Vec::new())));
/// let before = slot.current();
///
/// let answer = slot.suppress(|| {
///     slot.emit("hidden").expect("noop never fails");
///     42
/// });
///
/// assert_eq!(answer, 42);
/// assert!(Arc::ptr_eq(&before, &slot.current()));
/// ```
pub struct SinkSlot {
    current: RwLock<SharedSink>,
    noop: SharedSink,
}

impl SinkSlot {
    /// Creates a slot bound to `sink`.
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        Self {
            current: RwLock::new(sink),
            noop: shared(NoopSink),
        }
    }

    /// Returns the sink currently bound to the slot.
    #[must_use]
    pub fn current(&self) -> SharedSink {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Binds `sink` and returns the sink it replaced.
    pub fn replace(&self, sink: SharedSink) -> SharedSink {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, sink)
    }

    /// Emits `line` through the bound sink.
    ///
    /// The sink runs without the slot's lock held, so it may itself read or
    /// replace the binding.
    pub fn emit(&self, line: &str) -> io::Result<()> {
        let sink = self.current();
        sink.emit(line)
    }

    /// Reports whether `sink` is the exact sink currently bound.
    #[must_use]
    pub fn is_current(&self, sink: &SharedSink) -> bool {
        same_sink(&self.current(), sink)
    }

    /// Reports whether the slot's no-op sink is bound.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.is_current(&self.noop)
    }

    /// Silences the slot until the returned guard is dropped.
    ///
    /// The guard remembers the sink bound at this moment and puts it back on
    /// drop, including while unwinding from a panic.
    pub fn scoped_suppression(&self) -> SuppressGuard<'_> {
        let previous = self.replace(Arc::clone(&self.noop));
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "devnull::suppress", "log sink suppressed");
        SuppressGuard::new(self, previous)
    }

    /// Runs `callback` with the slot silenced and returns its result unchanged.
    ///
    /// Lines emitted through this slot while `callback` runs are discarded.
    /// The previous sink is bound again once `callback` returns or panics; a
    /// panic keeps unwinding with its original payload. Only the synchronous
    /// part of `callback` is covered: work it hands back to run later (a
    /// closure, a future) executes after the sink is restored.
    pub fn suppress<T, F>(&self, callback: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _guard = self.scoped_suppression();
        callback()
    }
}

impl Default for SinkSlot {
    /// A slot bound to newline-terminated standard output.
    fn default() -> Self {
        Self::new(shared(WriterSink::stdout()))
    }
}

impl fmt::Debug for SinkSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkSlot")
            .field("suppressed", &self.is_suppressed())
            .finish_non_exhaustive()
    }
}
