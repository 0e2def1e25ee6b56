//! Shared test utilities for the devnull workspace.
//!
//! [`CaptureSink`] records every emitted line in memory so tests can assert on
//! what reached a sink. [`TempLog`] backs a [`WriterSink`] with a real file in a
//! temporary directory.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use logging_sink::{LogSink, SharedSink, WriterSink};
use tempfile::TempDir;

/// Sink that keeps every emitted line.
///
/// Clones share the same buffer, so a test can bind one clone into a slot and
/// inspect the lines through another.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`SharedSink`] writing into this capture.
    #[must_use]
    pub fn shared(&self) -> SharedSink {
        Arc::new(self.clone())
    }

    /// Snapshot of the lines captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl LogSink for CaptureSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
        Ok(())
    }
}

/// Log file living in a temporary directory removed on drop.
#[derive(Debug)]
pub struct TempLog {
    _dir: TempDir,
    path: PathBuf,
}

impl TempLog {
    /// Creates a temporary directory holding an empty `output.log`.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("output.log");
        File::create(&path)?;
        Ok(Self { _dir: dir, path })
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a [`WriterSink`] appending to the log file.
    pub fn writer_sink(&self) -> io::Result<WriterSink<File>> {
        let file = File::options().append(true).open(&self.path)?;
        Ok(WriterSink::new(file))
    }

    /// Reads the log file back.
    pub fn contents(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
