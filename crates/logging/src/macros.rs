//! crates/logging/src/macros.rs
//! Formatting macro for informational output through the ambient slot.

/// Formats its arguments and emits the line through the ambient slot.
///
/// Write errors are discarded: informational output has no caller to report
/// them to. Use [`emit`](crate::emit) directly when the result matters.
///
/// # Example
/// ```
/// use logging::{devnull, info_log};
///
/// info_log!("copied {} files", 3);
/// devnull(|| info_log!("nobody sees this"));
/// ```
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        let _ = $crate::emit(&::std::format!($($arg)*));
    }};
}
