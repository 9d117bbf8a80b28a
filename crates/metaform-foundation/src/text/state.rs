//! Shared state holder for the content of a single-line text field.

use super::{TextFieldBuffer, TextRange};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of a field's text and selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldValue {
    pub text: String,
    pub selection: TextRange,
}

impl TextFieldValue {
    /// Cursor at end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = TextRange::cursor(text.len());
        Self { text, selection }
    }
}

/// What happened to an edit submitted through [`TextFieldState::edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Neither text nor selection changed.
    Unchanged,
    /// The edit was committed and listeners were notified.
    Applied,
    /// The edit filter refused the candidate text; nothing changed.
    Rejected,
}

type ChangeListener = Rc<dyn Fn(&TextFieldValue)>;

/// Predicate over the full candidate text of an edit.
pub type EditFilter = Rc<dyn Fn(&str) -> bool>;

struct TextFieldStateInner {
    value: TextFieldValue,
    is_editing: bool,
    filter: Option<EditFilter>,
    listeners: SmallVec<[ChangeListener; 2]>,
}

/// Clears the editing flag on drop so a panicking edit closure cannot wedge
/// the state.
struct EditGuard<'a> {
    inner: &'a RefCell<TextFieldStateInner>,
}

impl<'a> EditGuard<'a> {
    fn new(inner: &'a RefCell<TextFieldStateInner>) -> Option<Self> {
        let mut borrowed = inner.borrow_mut();
        if borrowed.is_editing {
            return None;
        }
        borrowed.is_editing = true;
        drop(borrowed);
        Some(Self { inner })
    }
}

impl Drop for EditGuard<'_> {
    fn drop(&mut self) {
        self.inner.borrow_mut().is_editing = false;
    }
}

/// Observable text content of a field.
///
/// All user edits go through [`edit`](Self::edit). When an edit filter is
/// installed, it sees the complete text the edit would produce and may refuse
/// it; a refused edit leaves text and selection untouched. Selection-only
/// changes are never filtered.
///
/// Handles are cheap to clone and compare equal when they share state. The
/// type is `Rc`-based and belongs to the UI thread.
///
/// # Panics
///
/// Starting an edit from inside another edit of the same state panics.
#[derive(Clone)]
pub struct TextFieldState {
    inner: Rc<RefCell<TextFieldStateInner>>,
}

impl std::fmt::Debug for TextFieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TextFieldState")
            .field("text", &inner.value.text)
            .field("selection", &inner.value.selection)
            .field("filtered", &inner.filter.is_some())
            .finish()
    }
}

impl TextFieldState {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TextFieldStateInner {
                value: TextFieldValue::new(initial_text),
                is_editing: false,
                filter: None,
                listeners: SmallVec::new(),
            })),
        }
    }

    pub fn text(&self) -> String {
        self.inner.borrow().value.text.clone()
    }

    pub fn selection(&self) -> TextRange {
        self.inner.borrow().value.selection
    }

    pub fn value(&self) -> TextFieldValue {
        self.inner.borrow().value.clone()
    }

    pub fn is_editing(&self) -> bool {
        self.inner.borrow().is_editing
    }

    /// Installs or removes the edit filter.
    pub fn set_filter(&self, filter: Option<EditFilter>) {
        self.inner.borrow_mut().filter = filter;
    }

    /// Registers a listener called after every applied edit.
    pub fn add_listener(&self, listener: impl Fn(&TextFieldValue) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Runs `f` against a scratch buffer and commits the result if the filter
    /// admits it.
    pub fn edit<F>(&self, f: F) -> EditOutcome
    where
        F: FnOnce(&mut TextFieldBuffer),
    {
        let guard = EditGuard::new(&self.inner)
            .expect("TextFieldState does not support concurrent or nested editing");

        let current = self.value();
        let mut buffer = TextFieldBuffer::with_selection(&current.text, current.selection);
        f(&mut buffer);

        let candidate = TextFieldValue {
            text: buffer.text().to_string(),
            selection: buffer.selection(),
        };
        if candidate == current {
            return EditOutcome::Unchanged;
        }

        if candidate.text != current.text {
            let filter = self.inner.borrow().filter.clone();
            if let Some(filter) = filter {
                if !filter(&candidate.text) {
                    log::trace!("edit rejected: {:?} -> {:?}", current.text, candidate.text);
                    return EditOutcome::Rejected;
                }
            }
        }

        self.inner.borrow_mut().value = candidate.clone();
        // Listeners may start edits of their own.
        drop(guard);
        self.notify(&candidate);
        EditOutcome::Applied
    }

    /// Filtered replacement of the whole text.
    pub fn set_text(&self, text: &str) -> EditOutcome {
        self.edit(|buffer| buffer.replace_all(text))
    }

    /// Replaces the text without consulting the filter or notifying listeners.
    ///
    /// Used for programmatic updates that must not look like user input.
    pub fn set_text_unfiltered(&self, text: impl Into<String>) {
        let _guard = EditGuard::new(&self.inner)
            .expect("TextFieldState does not support concurrent or nested editing");
        self.inner.borrow_mut().value = TextFieldValue::new(text);
    }

    /// Moves the selection; never filtered.
    pub fn set_selection(&self, selection: TextRange) {
        let mut inner = self.inner.borrow_mut();
        let len = inner.value.text.len();
        inner.value.selection = selection.coerce_in(len);
    }

    fn notify(&self, value: &TextFieldValue) {
        let listeners: SmallVec<[ChangeListener; 2]> =
            self.inner.borrow().listeners.iter().cloned().collect();
        for listener in listeners {
            listener(value);
        }
    }
}

impl Default for TextFieldState {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for TextFieldState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
