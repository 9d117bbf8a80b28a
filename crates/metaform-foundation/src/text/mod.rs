//! Text content of editable fields.
//!
//! - [`TextRange`] - Cursor position or selection
//! - [`TextFieldBuffer`] - Scratch buffer an edit operates on
//! - [`TextFieldState`] - Shared, filterable, observable field content
//!
//! ```
//! use metaform_foundation::text::{EditOutcome, TextFieldState};
//! use std::rc::Rc;
//!
//! let state = TextFieldState::new("4");
//! state.set_filter(Some(Rc::new(|text: &str| text.len() <= 2)));
//! assert_eq!(state.edit(|b| b.insert("2")), EditOutcome::Applied);
//! assert_eq!(state.edit(|b| b.insert("0")), EditOutcome::Rejected);
//! assert_eq!(state.text(), "42");
//! ```

mod buffer;
mod range;
mod single_line;
mod state;

pub use buffer::TextFieldBuffer;
pub use range::TextRange;
pub use single_line::filter_for_single_line;
pub use state::{EditFilter, EditOutcome, TextFieldState, TextFieldValue};
