//! Robot-style input for widget tests.
//!
//! A [`FieldRobot`] sends the same key, paste and focus events a toolkit
//! would, so every keystroke passes the field's admission check.
//!
//! ```ignore
//! let robot = FieldRobot::new(form.component("age").unwrap());
//! robot.type_text("42");
//! assert_eq!(robot.leave(), ErrorStatus::Valid);
//! ```

use metaform_foundation::{ErrorStatus, ValidatedTextField};
use metaform_ui::{
    handle_paste, FocusEvent, KeyCode, KeyEvent, Modifiers, WidgetHandle,
};
use std::cell::Cell;
use std::rc::Rc;

/// Drives one widget and counts refused keystrokes.
pub struct FieldRobot {
    widget: WidgetHandle,
    rejected: Rc<Cell<usize>>,
}

impl FieldRobot {
    pub fn new(widget: WidgetHandle) -> Self {
        let rejected = Rc::new(Cell::new(0));
        if let WidgetHandle::Text(field) = &widget {
            let counter = Rc::clone(&rejected);
            field.add_reject_listener(move |_| counter.set(counter.get() + 1));
        }
        Self { widget, rejected }
    }

    pub fn widget(&self) -> &WidgetHandle {
        &self.widget
    }

    fn text_field(&self) -> &ValidatedTextField {
        match self.widget.as_text() {
            Some(field) => field,
            None => panic!("{} widget does not take text input", self.widget.kind()),
        }
    }

    /// Types `text` one character at a time.
    pub fn type_text(&self, text: &str) -> &Self {
        for ch in text.chars() {
            self.widget.handle_key_event(&KeyEvent::character(ch));
        }
        self
    }

    pub fn press(&self, key: KeyCode) -> &Self {
        self.widget.handle_key_event(&KeyEvent::key_down(key));
        self
    }

    pub fn press_with(&self, key: KeyCode, modifiers: Modifiers) -> &Self {
        self.widget
            .handle_key_event(&KeyEvent::key_down_with_modifiers(key, modifiers));
        self
    }

    pub fn paste(&self, text: &str) -> &Self {
        handle_paste(self.text_field(), text);
        self
    }

    /// Selects everything and deletes it.
    pub fn clear(&self) -> &Self {
        self.press_with(KeyCode::A, Modifiers::COMMAND)
            .press(KeyCode::Backspace)
    }

    /// Moves focus away and returns the resulting status.
    pub fn leave(&self) -> ErrorStatus {
        self.widget.handle_focus_event(FocusEvent::LOST);
        self.widget.error_status()
    }

    pub fn text(&self) -> String {
        self.text_field().text()
    }

    pub fn status(&self) -> ErrorStatus {
        self.widget.error_status()
    }

    /// Number of keystrokes or pastes the validator refused so far.
    pub fn rejected(&self) -> usize {
        self.rejected.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_foundation::validation::IntegralValidator;
    use metaform_meta::IntWidth;

    #[test]
    fn typing_counts_rejections() {
        let field = ValidatedTextField::new(Rc::new(
            IntegralValidator::new(IntWidth::I32, false).with_bounds(0, 100),
        ));
        let robot = FieldRobot::new(WidgetHandle::Text(field));
        robot.type_text("1x5");
        assert_eq!(robot.text(), "15");
        assert_eq!(robot.rejected(), 1);
        robot.clear().type_text("150");
        assert_eq!(robot.leave(), ErrorStatus::range(0, 100));
    }
}
