use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::LogSink;
use crate::line_mode::LineMode;

/// Sink that renders lines into an [`io::Write`] target.
///
/// The writer sits behind a mutex so one sink can be shared between every
/// thread logging through a [`SinkSlot`](crate::SinkSlot). Each
/// [`emit`](LogSink::emit) writes the line and, depending on the configured
/// [`LineMode`], a trailing newline while holding the lock, keeping lines from
/// concurrent callers intact.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, LogSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.emit("first")?;
/// sink.emit("second")?;
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
///
/// let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.emit("progress 50%")?;
/// assert_eq!(sink.into_inner(), b"progress 50%".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        // A panic mid-write leaves at worst a partial line behind.
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stdout> {
    /// Sink writing newline-terminated lines to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    /// Sink writing newline-terminated lines to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(line.as_bytes())?;
        if self.line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}
