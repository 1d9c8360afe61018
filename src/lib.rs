#![doc = include_str!("../README.md")]

// Core modules
pub mod action;
pub mod client;
pub mod errors;
pub mod fields;
pub mod form;
pub mod hooks;
mod log_utils;
pub mod state;

// Re-export commonly used items at crate root for convenience
pub use client::FormClient;
pub use hooks::{use_form, use_form_with_client};

pub mod prelude {
    //! The prelude exports all the most common types and functions for using dioxus-submit.

    // The core hooks and their configuration
    pub use crate::hooks::{FormOptions, UseForm, use_form, use_form_with_client};

    // Submission targets
    pub use crate::action::{Action, Method};

    // The injected collaborators
    pub use crate::client::{Dispatch, FormClient, PageState};

    // Form-element capabilities
    pub use crate::form::{FormHandle, FormRef, MemoryForm, SubmitEvent, WeakForm};

    // Payload and error types
    pub use crate::errors::{FieldErrors, UsageError};
    pub use crate::fields::FormFields;

    // The lifecycle state, needed for matching
    pub use crate::state::SubmitState;
}
