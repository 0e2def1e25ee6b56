//! crates/logging/src/config.rs
//! Sink configuration: where informational output goes and how lines end.

use std::fmt;
use std::str::FromStr;

use logging_sink::{LineMode, NoopSink, SharedSink, WriterSink, shared};

/// Destination selected by a [`SinkConfig`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SinkTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Discard everything.
    Null,
}

impl SinkTarget {
    /// Canonical lowercase name of the target.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sink target name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid log sink target '{0}': use 'stdout', 'stderr' or 'null'")]
pub struct ParseSinkTargetError(String);

impl ParseSinkTargetError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SinkTarget {
    type Err = ParseSinkTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" | "-" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "null" | "none" | "devnull" | "/dev/null" => Ok(Self::Null),
            _ => Err(ParseSinkTargetError(s.to_owned())),
        }
    }
}

/// Configuration for the sink bound to the ambient slot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkConfig {
    /// Where lines go.
    pub target: SinkTarget,
    /// Whether each line gets a trailing newline.
    pub line_mode: LineMode,
}

impl SinkConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(target: SinkTarget, line_mode: LineMode) -> Self {
        Self { target, line_mode }
    }

    /// Configuration that discards all output.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(SinkTarget::Null, LineMode::WithNewline)
    }

    /// Builds a fresh sink for this configuration.
    ///
    /// Every call allocates a new sink, so the result is never identical to a
    /// sink built earlier.
    #[must_use]
    pub fn build(&self) -> SharedSink {
        match self.target {
            SinkTarget::Stdout => shared(WriterSink::with_line_mode(
                std::io::stdout(),
                self.line_mode,
            )),
            SinkTarget::Stderr => shared(WriterSink::with_line_mode(
                std::io::stderr(),
                self.line_mode,
            )),
            SinkTarget::Null => shared(NoopSink),
        }
    }
}
