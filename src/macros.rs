//! Small crate-wide convenience macros.

/// Console logging that compiles away in release builds. Keeps noisy state
/// transition traces out of production consoles without sprinkling
/// `cfg(debug_assertions)` at every call site.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        web_sys::console::log_1(&format!($($arg)*).into());
    }};
}
