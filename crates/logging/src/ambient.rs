//! crates/logging/src/ambient.rs
//! Process-wide sink binding shared by all code that logs informational output.

use std::io;
use std::sync::{Arc, LazyLock};

use logging_sink::{SharedSink, SinkSlot, SuppressGuard};

use super::config::SinkConfig;

static AMBIENT: LazyLock<Arc<SinkSlot>> = LazyLock::new(|| Arc::new(SinkSlot::default()));

/// The process-wide slot, bound to standard output until configured otherwise.
pub fn ambient() -> &'static SinkSlot {
    &AMBIENT
}

/// Shared handle to the process-wide slot, for owners that need `'static` data.
pub fn ambient_shared() -> Arc<SinkSlot> {
    Arc::clone(&AMBIENT)
}

/// Binds a sink built from `config` and returns the sink it replaced.
pub fn init(config: &SinkConfig) -> SharedSink {
    set_sink(config.build())
}

/// Binds `sink` to the process-wide slot and returns the sink it replaced.
pub fn set_sink(sink: SharedSink) -> SharedSink {
    ambient().replace(sink)
}

/// Returns the sink currently bound to the process-wide slot.
pub fn current_sink() -> SharedSink {
    ambient().current()
}

/// Emits one line through the process-wide slot.
pub fn emit(line: &str) -> io::Result<()> {
    ambient().emit(line)
}

/// Reports whether the process-wide slot is currently silenced.
pub fn is_suppressed() -> bool {
    ambient().is_suppressed()
}

/// Runs `callback` with the process-wide sink silenced and returns its result.
///
/// Anything logged through the ambient slot while `callback` runs is dropped;
/// the original sink is bound again once `callback` returns or panics. The
/// binding is shared by every thread, so a thread logging concurrently is
/// silenced too, and two threads suppressing at once race on the final
/// restoration. Use a dedicated [`SinkSlot`] when that matters.
///
/// # Examples
///
/// ```
/// use logging::{devnull, info_log};
///
/// let answer = devnull(|| {
///     info_log!("hidden");
///     42
/// });
/// assert_eq!(answer, 42);
/// ```
pub fn devnull<T, F>(callback: F) -> T
where
    F: FnOnce() -> T,
{
    ambient().suppress(callback)
}

/// Silences the process-wide sink until the returned guard is dropped.
pub fn suppressed() -> SuppressGuard<'static> {
    ambient().scoped_suppression()
}
