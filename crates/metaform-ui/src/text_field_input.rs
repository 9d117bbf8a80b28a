//! Keyboard, clipboard and focus handling for validated text fields.
//!
//! Every text change produced here goes through
//! [`ValidatedTextField::edit`], so illegal keystrokes are refused by the
//! field's validator before they reach the buffer.

use crate::key_event::{FocusEvent, KeyCode, KeyEvent};
use metaform_foundation::text::{filter_for_single_line, TextRange};
use metaform_foundation::ValidatedTextField;

/// Applies a key press to `field`.
///
/// Returns `true` when the event was consumed, including keystrokes the
/// validator refused. Enter and Tab are left to the caller for submit and
/// focus traversal.
pub fn handle_key_event(field: &ValidatedTextField, event: &KeyEvent) -> bool {
    if !event.is_key_down() {
        return false;
    }
    let shift = event.modifiers.shift;
    match event.key_code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::Escape => false,

        _ if event.has_text() && !event.modifiers.command_or_ctrl() => {
            let text = filter_for_single_line(&event.text);
            field.edit(|buffer| buffer.insert(&text));
            true
        }

        KeyCode::Backspace => {
            field.edit(|buffer| buffer.delete_before_cursor());
            true
        }

        KeyCode::Delete => {
            field.edit(|buffer| buffer.delete_after_cursor());
            true
        }

        KeyCode::ArrowLeft => {
            field.edit(|buffer| {
                if shift {
                    buffer.extend_selection_left();
                } else {
                    buffer.move_cursor_left();
                }
            });
            true
        }

        KeyCode::ArrowRight => {
            field.edit(|buffer| {
                if shift {
                    buffer.extend_selection_right();
                } else {
                    buffer.move_cursor_right();
                }
            });
            true
        }

        // Single line: up and down jump to the ends.
        KeyCode::Home | KeyCode::ArrowUp => {
            field.edit(|buffer| {
                if shift {
                    let anchor = buffer.selection().max();
                    buffer.select(TextRange::new(0, anchor));
                } else {
                    buffer.place_cursor_at_start();
                }
            });
            true
        }

        KeyCode::End | KeyCode::ArrowDown => {
            field.edit(|buffer| {
                if shift {
                    let anchor = buffer.selection().min();
                    let end = buffer.len();
                    buffer.select(TextRange::new(anchor, end));
                } else {
                    buffer.place_cursor_at_end();
                }
            });
            true
        }

        KeyCode::A if event.modifiers.command_or_ctrl() => {
            field.edit(|buffer| buffer.select_all());
            true
        }

        // Clipboard shortcuts belong to the platform layer.
        _ => false,
    }
}

/// Pastes clipboard text at the cursor as one edit.
pub fn handle_paste(field: &ValidatedTextField, text: &str) -> bool {
    let text = filter_for_single_line(text);
    field.edit(|buffer| buffer.insert(&text));
    true
}

/// Runs the exit protocol on a permanent focus loss.
///
/// Temporary losses (another window, a popup) keep the editing session open.
pub fn handle_focus_event(field: &ValidatedTextField, event: FocusEvent) -> bool {
    if event.is_permanent_loss() {
        field.focus_lost();
        true
    } else {
        false
    }
}
