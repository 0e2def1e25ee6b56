//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and a [`SinkSlot`].
//!
//! [`SinkLayer`] renders each tracing event as a single line and emits it
//! through a slot, so output produced with the standard tracing macros obeys
//! the same suppression as [`info_log!`](crate::info_log).
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{SinkConfig, devnull, init_tracing};
//!
//! init_tracing(&SinkConfig::default())?;
//!
//! tracing::info!(target: "app::copy", "copying file");
//! devnull(|| tracing::info!("not shown"));
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use logging_sink::SinkSlot;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use super::ambient::{ambient_shared, init};
use super::config::SinkConfig;

/// A tracing layer that emits events through a [`SinkSlot`].
///
/// Events more verbose than the layer's maximum level (default
/// [`LevelFilter::INFO`]) are ignored.
pub struct SinkLayer {
    slot: Arc<SinkSlot>,
    max_level: LevelFilter,
}

impl SinkLayer {
    /// Create a layer emitting through `slot`.
    #[must_use]
    pub const fn new(slot: Arc<SinkSlot>) -> Self {
        Self {
            slot,
            max_level: LevelFilter::INFO,
        }
    }

    /// Create a layer emitting through the ambient slot.
    #[must_use]
    pub fn ambient() -> Self {
        Self::new(ambient_shared())
    }

    /// Set the most verbose level that reaches the slot.
    #[must_use]
    pub fn with_max_level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.max_level = level.into();
        self
    }

    /// Render an event as `LEVEL target: message key=value ...`.
    fn render(level: &Level, target: &str, visitor: LineVisitor) -> String {
        let mut line = format!("{level} {target}: {}", visitor.message);
        for (name, value) in visitor.fields {
            let _ = write!(line, " {name}={value}");
        }
        line
    }
}

impl fmt::Debug for SinkLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkLayer")
            .field("max_level", &self.max_level)
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = Self::render(metadata.level(), metadata.target(), visitor);
        let _ = self.slot.emit(&line);
    }
}

/// Collects the `message` field and any remaining fields of an event.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.fields.push((field.name(), value.to_owned()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

/// Bind the ambient slot per `config` and install a global subscriber that
/// routes events through it.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{SinkConfig, init_tracing};
///
/// init_tracing(&SinkConfig::default())?;
/// tracing::info!("ready");
/// ```
pub fn init_tracing(config: &SinkConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    init(config);

    tracing_subscriber::registry()
        .with(SinkLayer::ambient())
        .try_init()
}

/// Like [`init_tracing`], with an additional filter layer in front.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{SinkConfig, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(&SinkConfig::default(), EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(config: &SinkConfig, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    init(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(SinkLayer::ambient().with_max_level(LevelFilter::TRACE))
        .try_init()
}
