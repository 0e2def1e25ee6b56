//! Integration tests for routing tracing events through a sink slot.
//!
//! Each test installs a scoped subscriber over its own slot, so no global
//! state is shared between them.

#![cfg(feature = "tracing")]

use std::sync::Arc;

use logging::SinkLayer;
use logging_sink::SinkSlot;
use test_support::CaptureSink;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

fn capture_slot() -> (Arc<SinkSlot>, CaptureSink) {
    let capture = CaptureSink::new();
    (Arc::new(SinkSlot::new(capture.shared())), capture)
}

/// Verifies events render with level, target, message and fields.
#[test]
fn events_render_as_lines() {
    let (slot, capture) = capture_slot();
    let subscriber = tracing_subscriber::registry().with(SinkLayer::new(Arc::clone(&slot)));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "app::copy", path = "a.txt", "copying file");
        tracing::warn!(target: "app", "careful");
    });

    assert_eq!(
        capture.take(),
        ["INFO app::copy: copying file path=a.txt", "WARN app: careful"]
    );
}

/// Verifies tracing output obeys suppression of the slot.
#[test]
fn suppression_silences_tracing_events() {
    let (slot, capture) = capture_slot();
    let subscriber = tracing_subscriber::registry().with(SinkLayer::new(Arc::clone(&slot)));

    let value = tracing::subscriber::with_default(subscriber, || {
        let value = slot.suppress(|| {
            tracing::info!(target: "app", "hidden");
            7
        });
        tracing::info!(target: "app", "visible");
        value
    });

    assert_eq!(value, 7);
    assert_eq!(capture.take(), ["INFO app: visible"]);
}

/// Verifies events above the layer's maximum level are dropped.
#[test]
fn max_level_filters_verbose_events() {
    let (slot, capture) = capture_slot();
    let layer = SinkLayer::new(Arc::clone(&slot)).with_max_level(Level::WARN);
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(target: "app", "debug");
        tracing::info!(target: "app", "info");
        tracing::error!(target: "app", "error");
    });

    assert_eq!(capture.take(), ["ERROR app: error"]);
}

/// Verifies the suppression trace events stay below the default level.
#[test]
fn suppression_trace_events_are_quiet_by_default() {
    let (slot, capture) = capture_slot();
    let subscriber = tracing_subscriber::registry().with(SinkLayer::new(Arc::clone(&slot)));

    tracing::subscriber::with_default(subscriber, || slot.suppress(|| ()));

    assert!(capture.is_empty());
}

/// Verifies suppression begin and end are traced at TRACE level.
#[test]
fn suppression_restore_is_traced_when_enabled() {
    let (slot, capture) = capture_slot();
    let layer = SinkLayer::new(Arc::clone(&slot)).with_max_level(Level::TRACE);
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || slot.suppress(|| ()));

    // The "suppressed" event lands in the no-op sink.
    assert_eq!(
        capture.take(),
        ["TRACE devnull::suppress: log sink restored"]
    );
}
