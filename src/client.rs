//! Injected collaborators: the request dispatcher and the page state
//!
//! The hook talks to the outside world through two capability contracts.
//! [`Dispatch`] performs the actual network submission; [`PageState`] exposes
//! the validation errors the hosting framework refreshes after each
//! navigation or submission cycle. Both are bundled into a [`FormClient`] and
//! provided to a component subtree through Dioxus context, so every
//! collaborator can be substituted with a fake in tests.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::action::Method;
use crate::errors::FieldErrors;
use crate::fields::FormFields;

/// Issues the actual network submission
///
/// The returned future resolves exactly once: `Ok(())` for a successful
/// submission, `Err(errors)` with the validation payload otherwise. Transport
/// failures are the implementation's to map into `FieldErrors` however the
/// application surfaces them. The hook does not retry; retry policy belongs
/// to the caller.
///
/// Any `Fn(Method, String, FormFields) -> Future` closure is a dispatcher:
///
/// ```rust
/// use dioxus_submit::prelude::*;
///
/// let client = FormClient::new(
///     |_method: Method, _url: String, _fields: FormFields| async { Ok(()) },
///     FieldErrors::new(),
/// );
/// # let _ = client;
/// ```
pub trait Dispatch: 'static {
    fn send(
        &self,
        method: Method,
        url: String,
        fields: FormFields,
    ) -> impl Future<Output = Result<(), FieldErrors>> + 'static;
}

impl<F, Fut> Dispatch for F
where
    F: Fn(Method, String, FormFields) -> Fut + 'static,
    Fut: Future<Output = Result<(), FieldErrors>> + 'static,
{
    fn send(
        &self,
        method: Method,
        url: String,
        fields: FormFields,
    ) -> impl Future<Output = Result<(), FieldErrors>> + 'static {
        self(method, url, fields)
    }
}

/// Read-only view of the page-level validation state
///
/// The hook reads a fresh snapshot on each call and never mutates it. A plain
/// [`FieldErrors`] works as a static source; `Rc<RefCell<FieldErrors>>` works
/// as a shared store the host updates between cycles.
pub trait PageState: 'static {
    fn field_errors(&self) -> FieldErrors;
}

impl PageState for FieldErrors {
    fn field_errors(&self) -> FieldErrors {
        self.clone()
    }
}

impl PageState for Rc<RefCell<FieldErrors>> {
    fn field_errors(&self) -> FieldErrors {
        self.borrow().clone()
    }
}

/// Object-safe shim over [`Dispatch`] so a client can hold any dispatcher
trait ErasedDispatch {
    fn send_erased(
        &self,
        method: Method,
        url: String,
        fields: FormFields,
    ) -> LocalBoxFuture<'static, Result<(), FieldErrors>>;
}

impl<D: Dispatch> ErasedDispatch for D {
    fn send_erased(
        &self,
        method: Method,
        url: String,
        fields: FormFields,
    ) -> LocalBoxFuture<'static, Result<(), FieldErrors>> {
        Box::pin(self.send(method, url, fields))
    }
}

/// The dispatcher and page state a form hook submits through
///
/// Provide one above the components that submit forms:
///
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_submit::prelude::*;
///
/// #[component]
/// fn App() -> Element {
///     use_context_provider(|| {
///         FormClient::new(
///             |_method: Method, _url: String, _fields: FormFields| async { Ok(()) },
///             FieldErrors::new(),
///         )
///     });
///     rsx! { div { "..." } }
/// }
/// ```
#[derive(Clone)]
pub struct FormClient {
    dispatch: Rc<dyn ErasedDispatch>,
    page: Rc<dyn PageState>,
}

impl FormClient {
    pub fn new(dispatch: impl Dispatch, page: impl PageState) -> Self {
        Self {
            dispatch: Rc::new(dispatch),
            page: Rc::new(page),
        }
    }

    /// Fresh snapshot of the page-level validation errors
    pub fn field_errors(&self) -> FieldErrors {
        self.page.field_errors()
    }

    pub(crate) fn send(
        &self,
        method: Method,
        url: String,
        fields: FormFields,
    ) -> LocalBoxFuture<'static, Result<(), FieldErrors>> {
        self.dispatch.send_erased(method, url, fields)
    }
}

impl fmt::Debug for FormClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormClient").finish_non_exhaustive()
    }
}
