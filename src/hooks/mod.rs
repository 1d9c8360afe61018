//! Submission hooks and utilities for Dioxus applications

// Main hook implementation
mod submit;

// Re-export everything from submit
pub use submit::*;
