//! Console Logging
//!
//! Thin wrappers over the browser console so non-UI modules can log without
//! touching `web_sys` directly. Native test builds fall back to stderr.

/// Log an error message.
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("ERROR: {}", message);
}

/// Log a warning message.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("WARN: {}", message);
}
