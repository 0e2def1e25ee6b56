use std::sync::Arc;

use super::SharedSink;
use crate::slot::SinkSlot;

/// RAII guard that keeps a [`SinkSlot`] silenced.
///
/// Instances are created by [`SinkSlot::scoped_suppression`]. While the guard
/// is alive the slot is bound to its no-op sink; dropping the guard binds the
/// sink that was in place when the guard was created. The restoration runs on
/// every exit path of the enclosing scope, unwinding included.
#[must_use = "dropping the guard immediately restores the previous sink"]
pub struct SuppressGuard<'a> {
    slot: Option<&'a SinkSlot>,
    previous: SharedSink,
}

impl<'a> SuppressGuard<'a> {
    pub(crate) const fn new(slot: &'a SinkSlot, previous: SharedSink) -> Self {
        Self {
            slot: Some(slot),
            previous,
        }
    }

    /// Returns the sink that will be bound again when the guard is dropped.
    #[must_use]
    pub const fn previous_sink(&self) -> &SharedSink {
        &self.previous
    }

    /// Consumes the guard without restoring the previous sink.
    ///
    /// The slot stays silenced and the no-op becomes its new baseline. The
    /// sink that would have been restored is handed back so the caller can
    /// bind it again later with [`SinkSlot::replace`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::{SinkSlot, NoopSink, shared};
    ///
    /// let slot = SinkSlot::new(shared(NoopSink));
    /// let original = slot.scoped_suppression().persist();
    /// assert!(slot.is_suppressed());
    ///
    /// slot.replace(original.clone());
    /// assert!(slot.is_current(&original));
    /// ```
    pub fn persist(mut self) -> SharedSink {
        self.slot = None;
        Arc::clone(&self.previous)
    }
}

impl Drop for SuppressGuard<'_> {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.replace(Arc::clone(&self.previous));
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "devnull::suppress", "log sink restored");
        }
    }
}

impl std::fmt::Debug for SuppressGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuppressGuard")
            .field("armed", &self.slot.is_some())
            .finish_non_exhaustive()
    }
}
