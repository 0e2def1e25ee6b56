//! Integration tests for `devnull` on the process-wide sink binding.
//!
//! Every test rebinds the ambient slot, so they run serially.

use std::panic::{self, AssertUnwindSafe};

use logging::{current_sink, devnull, emit, info_log, is_suppressed, set_sink, suppressed};
use serial_test::serial;
use test_support::CaptureSink;

fn capture_ambient() -> CaptureSink {
    let capture = CaptureSink::new();
    set_sink(capture.shared());
    capture
}

/// Verifies the hidden/visible scenario end to end.
#[test]
#[serial]
fn hidden_inside_visible_after() {
    let capture = capture_ambient();

    let answer = devnull(|| {
        info_log!("hidden");
        42
    });
    info_log!("visible");

    assert_eq!(answer, 42);
    assert_eq!(capture.take(), ["visible"]);
}

/// Verifies the bound sink is identical before and after the call.
#[test]
#[serial]
fn sink_identity_survives_devnull() {
    let _capture = capture_ambient();
    let before = current_sink();

    devnull(|| info_log!("quiet"));

    assert!(logging_sink::same_sink(&before, &current_sink()));
}

/// Verifies `Result` values pass through as-is.
#[test]
#[serial]
fn error_results_pass_through() {
    let capture = capture_ambient();

    let parsed = devnull(|| {
        info_log!("parsing");
        "not a number".parse::<u32>()
    });

    let err = parsed.expect_err("parse fails");
    assert_eq!(err, "x".parse::<u32>().expect_err("parse fails"));
    assert!(!is_suppressed());
    assert!(capture.is_empty());
}

/// Verifies a panicking callback leaves the ambient sink restored.
#[test]
#[serial]
fn panic_restores_ambient_sink() {
    let capture = capture_ambient();
    let before = current_sink();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        devnull(|| -> u8 {
            info_log!("hidden");
            panic!("boom");
        })
    }));

    assert_eq!(
        outcome.expect_err("panic escapes").downcast_ref::<&str>(),
        Some(&"boom")
    );
    assert!(logging_sink::same_sink(&before, &current_sink()));

    info_log!("after panic");
    assert_eq!(capture.take(), ["after panic"]);
}

/// Verifies nested `devnull` calls unwind to the original sink.
#[test]
#[serial]
fn nested_devnull_restores_original() {
    let capture = capture_ambient();

    devnull(|| {
        devnull(|| info_log!("inner"));
        assert!(is_suppressed());
        info_log!("outer");
    });
    info_log!("done");

    assert_eq!(capture.take(), ["done"]);
}

/// Verifies deferred work executes after the sink is back.
#[test]
#[serial]
fn deferred_work_is_not_suppressed() {
    let capture = capture_ambient();

    let later = devnull(|| {
        info_log!("now");
        || info_log!("later")
    });
    later();

    assert_eq!(capture.take(), ["later"]);
}

/// Verifies other threads logging through the ambient slot are silenced too.
#[test]
#[serial]
fn ambient_suppression_is_process_wide() {
    let capture = capture_ambient();

    devnull(|| {
        std::thread::spawn(|| emit("from another thread").expect("noop never fails"))
            .join()
            .expect("thread joins");
    });

    assert!(capture.is_empty());
}

/// Verifies the guard form mirrors `devnull`.
#[test]
#[serial]
fn guard_form_restores_on_scope_exit() {
    let capture = capture_ambient();
    let before = current_sink();
    {
        let guard = suppressed();
        info_log!("hidden");
        assert!(logging_sink::same_sink(guard.previous_sink(), &before));
    }
    info_log!("shown");
    assert_eq!(capture.take(), ["shown"]);
}
