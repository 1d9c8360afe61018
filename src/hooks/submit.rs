//! # Form Submission Hook
//!
//! [`use_form`] creates a submission controller bound to one logical form: it
//! dispatches the form's fields through the application's [`FormClient`],
//! tracks the pending state reactively, surfaces the page-level validation
//! errors, and can reset the form (reapplying default values) after a
//! successful submission.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_submit::prelude::*;
//!
//! #[component]
//! fn NewPost() -> Element {
//!     let form = use_form(
//!         FormOptions::new()
//!             .clear_on_success(true)
//!             .default_values(FormFields::new().with("visibility", "public")),
//!     );
//!     let title_error = form.error("title").unwrap_or_default();
//!     let submit = form.clone();
//!
//!     rsx! {
//!         button {
//!             disabled: form.is_pending(),
//!             onclick: move |_| submit.submit("/posts", None),
//!             "Publish"
//!         }
//!         p { "{title_error}" }
//!     }
//! }
//! ```

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::action::Action;
use crate::client::FormClient;
use crate::errors::{FieldErrors, UsageError};
use crate::fields::FormFields;
use crate::form::{FormRef, SubmitEvent, WeakForm};
use crate::state::SubmitState;

/// Configuration for a submission controller
///
/// Built with chained setters; every option has a default. The options are
/// captured on the hook's first render, like any hook initializer.
#[derive(Clone)]
pub struct FormOptions {
    on_success: Option<Rc<dyn Fn()>>,
    on_error: Option<Rc<dyn Fn(FieldErrors)>>,
    prevent_double_submit: bool,
    clear_on_success: bool,
    default_values: FormFields,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            on_success: None,
            on_error: None,
            prevent_double_submit: true,
            clear_on_success: false,
            default_values: FormFields::new(),
        }
    }
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after each successful submission
    pub fn on_success(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_success = Some(Rc::new(callback));
        self
    }

    /// Called with the validation payload after each failed submission
    pub fn on_error(mut self, callback: impl Fn(FieldErrors) + 'static) -> Self {
        self.on_error = Some(Rc::new(callback));
        self
    }

    /// Drop submissions issued while one is in flight (default: true)
    pub fn prevent_double_submit(mut self, enabled: bool) -> Self {
        self.prevent_double_submit = enabled;
        self
    }

    /// Reset the form after a successful submission (default: false)
    pub fn clear_on_success(mut self, enabled: bool) -> Self {
        self.clear_on_success = enabled;
        self
    }

    /// Values reapplied after each reset, keyed by field name (default: none)
    pub fn default_values(mut self, values: FormFields) -> Self {
        self.default_values = values;
        self
    }
}

// Callbacks keep FormOptions from deriving Debug; render the data fields only.
impl fmt::Debug for FormOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormOptions")
            .field("prevent_double_submit", &self.prevent_double_submit)
            .field("clear_on_success", &self.clear_on_success)
            .field("default_values", &self.default_values)
            .finish_non_exhaustive()
    }
}

/// The submission controller returned by [`use_form`]
///
/// Cloning is cheap and every clone drives the same underlying state, so the
/// controller can be moved into as many event handlers as a component needs.
#[derive(Clone)]
pub struct UseForm {
    state: Signal<SubmitState>,
    active_form: Signal<Option<WeakForm>>,
    options: Rc<FormOptions>,
    client: FormClient,
}

impl UseForm {
    /// Current lifecycle state; reading during render subscribes the component
    pub fn state(&self) -> SubmitState {
        *self.state.read()
    }

    /// True while a submission's outcome has not yet been observed
    pub fn is_pending(&self) -> bool {
        self.state.read().is_pending()
    }

    /// Fresh snapshot of the page-level validation errors
    pub fn errors(&self) -> FieldErrors {
        self.client.field_errors()
    }

    /// The validation message for one field, if any
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors().get(field).cloned()
    }

    /// Submit the form's current field values to `action`
    ///
    /// The target form is the explicit argument when given, otherwise the form
    /// remembered from an earlier submission. With neither available (or the
    /// remembered form unmounted) the call aborts with a diagnostic and no
    /// state change. While a submission is pending and double-submit
    /// prevention is on, further calls are dropped silently; they are never
    /// queued.
    ///
    /// Dispatch-level failures never panic: the outcome lands in the
    /// `on_success`/`on_error` callbacks, exactly one of them, exactly once.
    pub fn submit(&self, action: impl Into<Action>, form: impl Into<Option<FormRef>>) {
        let Some(form) = self.resolve_target(form.into()) else {
            return;
        };
        if self.options.prevent_double_submit && self.state.peek().is_pending() {
            crate::debug_log!("submission dropped: a previous one is still pending");
            return;
        }

        let mut state = self.state;
        let mut active_form = self.active_form;
        state.set(SubmitState::Pending);
        active_form.set(Some(form.downgrade()));

        let fields = FormFields::from_entries(form.entries());
        let (url, method) = action.into().into_parts();
        crate::log_submit_start!("{} {} ({} fields)", method, url, fields.len());

        let this = self.clone();
        let target = form.downgrade();
        spawn(async move {
            match this.client.send(method, url.clone(), fields).await {
                Ok(()) => {
                    state.set(SubmitState::Idle);
                    crate::log_submit_success!("{} {}", method, url);
                    if this.options.clear_on_success {
                        match target.upgrade() {
                            Some(form) => this.apply_reset(&form),
                            None => {
                                crate::debug_log!(
                                    "skipping clear: the form unmounted while the submission was in flight"
                                );
                            }
                        }
                    }
                    if let Some(on_success) = &this.options.on_success {
                        on_success();
                    }
                }
                Err(errors) => {
                    state.set(SubmitState::Idle);
                    crate::log_submit_error!("{} {} ({} field errors)", method, url, errors.len());
                    if let Some(on_error) = &this.options.on_error {
                        on_error(errors);
                    }
                }
            }
        });
    }

    /// Reset the form's fields, then reapply the configured default values
    ///
    /// The target form resolves the same way as in [`UseForm::submit`]. The
    /// native-style reset happens immediately; the default values are written
    /// on the next scheduling turn, each write followed by the field's
    /// changed notification so reactive bindings recompute. Defaults naming
    /// fields the form does not have are skipped silently.
    pub fn reset_form(&self, form: impl Into<Option<FormRef>>) {
        let Some(form) = self.resolve_target(form.into()) else {
            return;
        };
        self.apply_reset(&form);
    }

    /// A handler for a form's submit event, bound to one action
    ///
    /// The handler suppresses the default full-page submission, remembers the
    /// event's originating form as the active form, and submits it.
    pub fn on_submit<E: SubmitEvent>(&self, action: impl Into<Action>) -> impl FnMut(E) + 'static {
        let this = self.clone();
        let action = action.into();
        move |event: E| {
            event.prevent_default();
            match event.form() {
                Some(form) => this.submit(action.clone(), form),
                None => {
                    crate::log_form_warn!("submit event carried no form handle");
                }
            }
        }
    }

    fn resolve_target(&self, explicit: Option<FormRef>) -> Option<FormRef> {
        if let Some(form) = explicit {
            return Some(form);
        }
        let remembered = (*self.active_form.peek()).clone();
        match remembered {
            Some(weak) => match weak.upgrade() {
                Some(form) => Some(form),
                None => {
                    crate::log_form_warn!("{}", UsageError::FormGone);
                    None
                }
            },
            None => {
                crate::log_form_warn!("{}", UsageError::NoForm);
                None
            }
        }
    }

    fn apply_reset(&self, form: &FormRef) {
        form.reset();
        crate::log_reset!(
            "form reset ({} default values to reapply)",
            self.options.default_values.len()
        );
        if self.options.default_values.is_empty() {
            return;
        }

        let defaults = self.options.default_values.clone();
        let target = form.downgrade();
        // Deferred a turn so the reset is observable before the defaults land.
        spawn(async move {
            let Some(form) = target.upgrade() else {
                return;
            };
            for (name, value) in defaults.iter() {
                if form.set_value(name, value) {
                    form.notify_changed(name);
                }
            }
        });
    }
}

impl fmt::Debug for UseForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseForm")
            .field("state", &*self.state.peek())
            .finish_non_exhaustive()
    }
}

/// Create a submission controller using the [`FormClient`] from context
///
/// Panics when no `FormClient` has been provided above this component; call
/// `use_context_provider(|| FormClient::new(...))` in a parent, or use
/// [`use_form_with_client`] to inject one explicitly.
pub fn use_form(options: FormOptions) -> UseForm {
    let client = use_hook(|| {
        try_consume_context::<FormClient>().unwrap_or_else(|| {
            panic!(
                "No FormClient in context. Provide one with use_context_provider(|| FormClient::new(...)) above this component, or use use_form_with_client()."
            )
        })
    });
    use_form_with_client(client, options)
}

/// Create a submission controller with an explicitly injected client
///
/// The context-free variant of [`use_form`]; the usual entry point in tests,
/// where the client wraps fake collaborators.
pub fn use_form_with_client(client: FormClient, options: FormOptions) -> UseForm {
    let state = use_signal(|| SubmitState::Idle);
    let active_form = use_signal(|| None::<WeakForm>);
    let options = use_hook(|| Rc::new(options));
    UseForm {
        state,
        active_form,
        options,
        client,
    }
}
