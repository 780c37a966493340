//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys`.
//! Native builds (tests, native hosts) compile the macro down to a no-op
//! that still type-checks its format arguments.

/// Log a formatted message to the host console.
///
/// ```rust
/// use wireworld_engine::console_log;
///
/// let cells = 3;
/// console_log!("loaded {} cells", cells);
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::console::log_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn log_str(message: &str) {
    web_sys::console::log_1(&message.into());
}
