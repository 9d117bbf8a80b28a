//! Text field bound to a [`Validator`].
//!
//! The field owns a [`TextFieldState`] whose edit filter is the validator's
//! `admit`. Every accepted edit recomputes the field's [`ErrorStatus`]; a
//! permanent focus loss runs the exit protocol:
//!
//! 1. `status(text, true)`
//! 2. `normalize(text, status)`
//! 3. if the text changed, write it back silently and run `status` again
//!
//! Programmatic writes through [`set_text`](ValidatedTextField::set_text)
//! bypass admission and reset the status to valid.

use crate::text::{EditOutcome, TextFieldBuffer, TextFieldState};
use crate::validation::{ErrorStatus, Validator};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

type StatusListener = Rc<dyn Fn(&ErrorStatus)>;
type RejectListener = Rc<dyn Fn(&str)>;

struct FieldInner {
    status: ErrorStatus,
    status_listeners: SmallVec<[StatusListener; 1]>,
    reject_listeners: SmallVec<[RejectListener; 1]>,
}

/// A single-line text field that validates as the user types.
#[derive(Clone)]
pub struct ValidatedTextField {
    state: TextFieldState,
    validator: Rc<dyn Validator>,
    inner: Rc<RefCell<FieldInner>>,
}

impl ValidatedTextField {
    pub fn new(validator: Rc<dyn Validator>) -> Self {
        let state = TextFieldState::new("");
        let admit = validator.clone();
        state.set_filter(Some(Rc::new(move |candidate: &str| admit.admit(candidate))));
        Self {
            state,
            validator,
            inner: Rc::new(RefCell::new(FieldInner {
                status: ErrorStatus::Valid,
                status_listeners: SmallVec::new(),
                reject_listeners: SmallVec::new(),
            })),
        }
    }

    pub fn text(&self) -> String {
        self.state.text()
    }

    pub fn state(&self) -> &TextFieldState {
        &self.state
    }

    pub fn validator(&self) -> &Rc<dyn Validator> {
        &self.validator
    }

    pub fn error_status(&self) -> ErrorStatus {
        self.inner.borrow().status.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.borrow().status.is_valid()
    }

    pub fn is_mandatory(&self) -> bool {
        self.validator.is_mandatory()
    }

    /// Called whenever the status is recomputed.
    pub fn add_status_listener(&self, listener: impl Fn(&ErrorStatus) + 'static) {
        self.inner
            .borrow_mut()
            .status_listeners
            .push(Rc::new(listener));
    }

    /// Called with the unchanged text when an edit is refused; the reject cue.
    pub fn add_reject_listener(&self, listener: impl Fn(&str) + 'static) {
        self.inner
            .borrow_mut()
            .reject_listeners
            .push(Rc::new(listener));
    }

    /// Applies a user edit. Refused edits leave text and status untouched.
    pub fn edit<F>(&self, f: F) -> EditOutcome
    where
        F: FnOnce(&mut TextFieldBuffer),
    {
        let outcome = self.state.edit(f);
        match outcome {
            EditOutcome::Applied => {
                let text = self.state.text();
                let status = if text.is_empty() {
                    ErrorStatus::Valid
                } else {
                    self.validator.status(&text, false)
                };
                self.set_status(status);
            }
            EditOutcome::Rejected => {
                let text = self.state.text();
                let listeners: SmallVec<[RejectListener; 1]> =
                    self.inner.borrow().reject_listeners.iter().cloned().collect();
                for listener in listeners {
                    listener(&text);
                }
            }
            EditOutcome::Unchanged => {}
        }
        outcome
    }

    /// Types `text` at the cursor.
    pub fn type_text(&self, text: &str) -> EditOutcome {
        self.edit(|buffer| buffer.insert(text))
    }

    /// Runs the exit protocol and returns the final status.
    pub fn focus_lost(&self) -> ErrorStatus {
        let text = self.state.text();
        let mut status = self.validator.status(&text, true);
        let normalized = self.validator.normalize(&text, &status);
        if normalized != text {
            log::trace!("normalized {text:?} to {normalized:?}");
            self.state.set_text_unfiltered(normalized.as_str());
            status = self.validator.status(&normalized, true);
        }
        self.set_status(status.clone());
        status
    }

    /// Replaces the text without admission or validation.
    pub fn set_text(&self, text: impl Into<String>) {
        self.state.set_text_unfiltered(text);
        self.set_status(ErrorStatus::Valid);
    }

    /// Overrides the status, e.g. when a later conversion step fails.
    pub fn set_status(&self, status: ErrorStatus) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.status == status {
                return;
            }
            log::trace!("status {} -> {}", inner.status, status);
            inner.status = status.clone();
            inner.status_listeners.clone()
        };
        for listener in listeners {
            listener(&status);
        }
    }
}

impl PartialEq for ValidatedTextField {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl std::fmt::Debug for ValidatedTextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedTextField")
            .field("text", &self.state.text())
            .field("status", &self.inner.borrow().status)
            .finish()
    }
}
