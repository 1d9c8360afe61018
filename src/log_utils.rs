//! Internal logging utilities for consistent log formatting across the library
//!
//! This module provides macros that adapt log messages based on feature flags:
//! - `tracing`: Enable/disable all logging (enabled by default)
//! - `plain-logs`: When enabled with `tracing`, uses plain text prefixes instead of emojis
//!
//! ## Usage
//!
//! ```toml
//! # Default: tracing enabled with emojis
//! dioxus-submit = "0.1"
//!
//! # Disable all logging
//! dioxus-submit = { version = "0.1", default-features = false }
//!
//! # Enable tracing with plain text (no emojis)
//! dioxus-submit = { version = "0.1", features = ["plain-logs"] }
//! ```

/// Internal debug logging macro that respects the tracing feature flag
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Logs a submission dispatch with appropriate formatting
#[macro_export]
macro_rules! log_submit_start {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("📤 [SUBMIT] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[SUBMIT] {}", format!($($arg)*));
    };
}

/// Logs a submission success with appropriate formatting
#[macro_export]
macro_rules! log_submit_success {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("✅ [SUBMIT] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[SUBMIT-SUCCESS] {}", format!($($arg)*));
    };
}

/// Logs a submission error with appropriate formatting
#[macro_export]
macro_rules! log_submit_error {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("❌ [SUBMIT] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[SUBMIT-ERROR] {}", format!($($arg)*));
    };
}

/// Logs a form reset with appropriate formatting
#[macro_export]
macro_rules! log_reset {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🧹 [RESET] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[RESET] {}", format!($($arg)*));
    };
}

/// Logs a call-site usage problem with appropriate formatting
#[macro_export]
macro_rules! log_form_warn {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::warn!("⚠️ [FORM] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::warn!("[FORM] {}", format!($($arg)*));
    };
}
