//! Widgets a form is assembled from.
//!
//! All widgets are cheap `Rc` handles: cloning one shares the same state, and
//! equality is identity.

mod choice;
mod list;
mod toggle;

pub use crate::error::WidgetError;
pub use choice::{ChoiceBox, ChoiceItem};
pub use list::EditableList;
pub use toggle::{ToggleGroup, ToggleOption};

use crate::key_event::{FocusEvent, KeyEvent};
use crate::text_field_input;
use metaform_foundation::{ErrorStatus, ValidatedTextField};

/// Any widget a form can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetHandle {
    Text(ValidatedTextField),
    Toggle(ToggleGroup),
    Choice(ChoiceBox),
    List(EditableList),
}

impl WidgetHandle {
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetHandle::Text(_) => "text",
            WidgetHandle::Toggle(_) => "toggle",
            WidgetHandle::Choice(_) => "choice",
            WidgetHandle::List(_) => "list",
        }
    }

    /// Toggles never carry an error.
    pub fn error_status(&self) -> ErrorStatus {
        match self {
            WidgetHandle::Text(field) => field.error_status(),
            WidgetHandle::Toggle(_) => ErrorStatus::Valid,
            WidgetHandle::Choice(choice) => choice.error_status(),
            WidgetHandle::List(list) => list.error_status(),
        }
    }

    /// Runs the widget's exit protocol and returns the resulting status.
    pub fn focus_lost(&self) -> ErrorStatus {
        match self {
            WidgetHandle::Text(field) => field.focus_lost(),
            WidgetHandle::Toggle(_) => ErrorStatus::Valid,
            WidgetHandle::Choice(choice) => choice.focus_lost(),
            WidgetHandle::List(list) => list.focus_lost(),
        }
    }

    pub fn handle_focus_event(&self, event: FocusEvent) -> bool {
        match self {
            WidgetHandle::Text(field) => text_field_input::handle_focus_event(field, event),
            _ if event.is_permanent_loss() => {
                self.focus_lost();
                true
            }
            _ => false,
        }
    }

    /// Key events only reach text fields.
    pub fn handle_key_event(&self, event: &KeyEvent) -> bool {
        match self {
            WidgetHandle::Text(field) => text_field_input::handle_key_event(field, event),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&ValidatedTextField> {
        match self {
            WidgetHandle::Text(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<&ToggleGroup> {
        match self {
            WidgetHandle::Toggle(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&ChoiceBox> {
        match self {
            WidgetHandle::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&EditableList> {
        match self {
            WidgetHandle::List(list) => Some(list),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_foundation::validation::IntegralValidator;
    use metaform_meta::IntWidth;
    use std::rc::Rc;

    #[test]
    fn focus_loss_dispatches_to_widget() {
        let choice = WidgetHandle::Choice(ChoiceBox::new(
            vec![ChoiceItem::new("A", "A")],
            true,
            true,
        ));
        assert!(choice.handle_focus_event(FocusEvent::LOST));
        assert_eq!(choice.error_status(), ErrorStatus::Mandatory);

        let field = ValidatedTextField::new(Rc::new(IntegralValidator::new(IntWidth::I16, true)));
        let text = WidgetHandle::Text(field);
        assert!(text.handle_focus_event(FocusEvent::LOST));
        assert_eq!(text.error_status(), ErrorStatus::Mandatory);
    }

    #[test]
    fn keys_only_reach_text_fields() {
        let toggle = WidgetHandle::Toggle(ToggleGroup::new([]));
        assert!(!toggle.handle_key_event(&KeyEvent::character('1')));
        assert!(toggle.as_text().is_none());
        assert_eq!(toggle.kind(), "toggle");
    }

    #[test]
    fn clones_share_state() {
        let list = EditableList::new(false, 0, 3);
        let handle = WidgetHandle::List(list.clone());
        list.add("x").expect("room");
        assert_eq!(handle.as_list().map(|l| l.len()), Some(1));
        assert_eq!(handle, WidgetHandle::List(list));
    }
}
