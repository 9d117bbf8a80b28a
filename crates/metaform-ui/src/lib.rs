//! Input events and widgets for metaform.
//!
//! Text fields come from `metaform-foundation`; this crate adds key and focus
//! dispatch for them plus the non-text widgets a synthesized form uses:
//! toggle groups, choice boxes and editable lists.

mod error;
pub mod key_event;
pub mod text_field_input;
pub mod widgets;

pub use error::WidgetError;
pub use key_event::{FocusEvent, KeyCode, KeyEvent, KeyEventType, Modifiers};
pub use text_field_input::{handle_focus_event, handle_key_event, handle_paste};
pub use widgets::{
    ChoiceBox, ChoiceItem, EditableList, ToggleGroup, ToggleOption, WidgetHandle,
};

pub use metaform_foundation::{ErrorStatus, ValidatedTextField};
