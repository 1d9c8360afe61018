//! Form-element capabilities
//!
//! The hook never touches a concrete form element. It talks to a
//! [`FormHandle`], the capability surface a platform adapter implements on
//! top of whatever it renders to: a `web_sys::HtmlFormElement` on the web, a
//! signal-backed form model on desktop or liveview, or [`MemoryForm`] in
//! tests.
//!
//! [`FormRef`] is the strong, cheaply-cloneable handle callers pass around.
//! The hook itself only ever *remembers* a form through a [`WeakForm`]
//! back-reference: it tracks which form it last operated on without owning
//! that form's lifecycle, and re-validates the reference on every use.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Capability surface of a single form element
pub trait FormHandle: 'static {
    /// The raw `(name, value)` entry list, in document order
    ///
    /// Controls that contribute nothing when the form serializes (unchecked
    /// checkboxes and radios, disabled controls) must be omitted, matching
    /// browser form-encoding. Repeated names are allowed; the hook flattens
    /// them last-one-wins.
    fn entries(&self) -> Vec<(String, String)>;

    /// Reset every field to its initial state
    fn reset(&self);

    /// Write `value` into the field named `name`
    ///
    /// Returns false when no such field exists; the hook treats that as a
    /// silent skip, not an error.
    fn set_value(&self, name: &str, value: &str) -> bool;

    /// Raise the changed notifications observers of `name` listen for
    ///
    /// A DOM-backed handle dispatches the native input and change events so
    /// reactive bindings recompute; a signal-backed handle needs nothing here
    /// because the write itself wakes its observers.
    fn notify_changed(&self, name: &str);
}

/// A strong, cheaply-cloneable handle to a form
#[derive(Clone)]
pub struct FormRef {
    inner: Rc<dyn FormHandle>,
}

impl FormRef {
    pub fn new(handle: impl FormHandle) -> Self {
        Self {
            inner: Rc::new(handle),
        }
    }

    /// A weak back-reference that does not keep the form alive
    pub fn downgrade(&self) -> WeakForm {
        WeakForm {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.inner.entries()
    }

    pub fn reset(&self) {
        self.inner.reset()
    }

    pub fn set_value(&self, name: &str, value: &str) -> bool {
        self.inner.set_value(name, value)
    }

    pub fn notify_changed(&self, name: &str) {
        self.inner.notify_changed(name)
    }
}

impl PartialEq for FormRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FormRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRef").finish_non_exhaustive()
    }
}

/// Weak counterpart of [`FormRef`]
///
/// Upgrading yields `None` once every strong handle is gone, which the hook
/// treats as "the form has unmounted".
#[derive(Clone)]
pub struct WeakForm {
    inner: Weak<dyn FormHandle>,
}

impl WeakForm {
    pub fn upgrade(&self) -> Option<FormRef> {
        self.inner.upgrade().map(|inner| FormRef { inner })
    }
}

impl fmt::Debug for WeakForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakForm").finish_non_exhaustive()
    }
}

/// Capability surface of a form's submit event
///
/// Platform adapters implement this over their native event type so the
/// handler returned by `UseForm::on_submit` can suppress the default
/// full-page submission and reach the originating form.
pub trait SubmitEvent {
    /// Suppress the platform's default submission behavior
    fn prevent_default(&self);

    /// The form the event originated from, if the adapter can resolve one
    fn form(&self) -> Option<FormRef>;
}

#[derive(Clone, Debug, PartialEq)]
enum Control {
    Text { initial: String, value: String },
    Checkbox { initial: bool, checked: bool, value: String },
}

#[derive(Clone, Debug, PartialEq)]
struct MemoryField {
    name: String,
    control: Control,
}

#[derive(Default)]
struct MemoryState {
    fields: Vec<MemoryField>,
    notifications: Vec<String>,
}

/// An in-memory, order-preserving [`FormHandle`] implementation
///
/// Serves state-driven forms on renderers without a DOM, and doubles as the
/// test double for everything in this crate. Text fields and checkboxes are
/// enough to exercise the form-encoding contract: document order, repeated
/// names, and unchecked-checkbox omission.
///
/// Cloning shares the underlying state. Note that [`MemoryForm::handle`]
/// allocates a fresh strong handle each call, so a [`WeakForm`] taken from
/// one handle does not track another.
#[derive(Clone, Default)]
pub struct MemoryForm {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field whose initial and current value are `initial`
    pub fn with_text(self, name: impl Into<String>, initial: impl Into<String>) -> Self {
        let initial = initial.into();
        self.state.borrow_mut().fields.push(MemoryField {
            name: name.into(),
            control: Control::Text {
                value: initial.clone(),
                initial,
            },
        });
        self
    }

    /// Add a checkbox with a fixed submitted value and an initial checked state
    pub fn with_checkbox(
        self,
        name: impl Into<String>,
        value: impl Into<String>,
        checked: bool,
    ) -> Self {
        self.state.borrow_mut().fields.push(MemoryField {
            name: name.into(),
            control: Control::Checkbox {
                initial: checked,
                checked,
                value: value.into(),
            },
        });
        self
    }

    /// A strong handle to this form
    pub fn handle(&self) -> FormRef {
        FormRef::new(self.clone())
    }

    /// Simulate the user editing every text field named `name`
    pub fn type_value(&self, name: &str, value: &str) {
        for field in &mut self.state.borrow_mut().fields {
            if field.name == name {
                if let Control::Text { value: current, .. } = &mut field.control {
                    *current = value.to_string();
                }
            }
        }
    }

    /// Simulate the user toggling every checkbox named `name`
    pub fn set_checked(&self, name: &str, checked: bool) {
        for field in &mut self.state.borrow_mut().fields {
            if field.name == name {
                if let Control::Checkbox { checked: current, .. } = &mut field.control {
                    *current = checked;
                }
            }
        }
    }

    /// Current value of the first field named `name`
    pub fn value(&self, name: &str) -> Option<String> {
        self.state
            .borrow()
            .fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| match &field.control {
                Control::Text { value, .. } => value.clone(),
                Control::Checkbox { value, .. } => value.clone(),
            })
    }

    /// Names passed to [`FormHandle::notify_changed`], in call order
    pub fn notifications(&self) -> Vec<String> {
        self.state.borrow().notifications.clone()
    }
}

impl FormHandle for MemoryForm {
    fn entries(&self) -> Vec<(String, String)> {
        self.state
            .borrow()
            .fields
            .iter()
            .filter_map(|field| match &field.control {
                Control::Text { value, .. } => Some((field.name.clone(), value.clone())),
                Control::Checkbox { checked: true, value, .. } => {
                    Some((field.name.clone(), value.clone()))
                }
                Control::Checkbox { checked: false, .. } => None,
            })
            .collect()
    }

    fn reset(&self) {
        for field in &mut self.state.borrow_mut().fields {
            match &mut field.control {
                Control::Text { initial, value } => *value = initial.clone(),
                Control::Checkbox { initial, checked, .. } => *checked = *initial,
            }
        }
    }

    fn set_value(&self, name: &str, value: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let mut found = false;
        for field in &mut state.fields {
            if field.name == name {
                match &mut field.control {
                    Control::Text { value: current, .. } => *current = value.to_string(),
                    Control::Checkbox { value: current, .. } => *current = value.to_string(),
                }
                found = true;
            }
        }
        found
    }

    fn notify_changed(&self, name: &str) {
        self.state.borrow_mut().notifications.push(name.to_string());
    }
}
