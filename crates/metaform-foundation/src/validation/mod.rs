//! Keystroke-level validation of text fields.
//!
//! A [`Validator`] drives one field through three calls:
//!
//! 1. [`admit`](Validator::admit) before every edit, with the full text the
//!    edit would produce. Returning `false` refuses the edit.
//! 2. [`status`](Validator::status) after every accepted edit with
//!    `on_exit == false`, and on focus loss with `on_exit == true`. While
//!    editing, incomplete input such as a lone sign is tolerated; on exit it
//!    is not.
//! 3. [`normalize`](Validator::normalize) on focus loss, whatever the status.
//!    Valid text is rewritten to its canonical spelling; anything else is
//!    returned unchanged.
//!
//! The field re-runs `status` on the normalized text, so normalization can
//! never clear an error on its own.

mod date;
mod floating;
mod integral;
mod status;
mod text_length;

pub use date::DateValidator;
pub use floating::FloatingValidator;
pub use integral::IntegralValidator;
pub use status::{ErrorStatus, InvalidKind};
pub use text_length::TextLengthValidator;

/// Admission, status and exit normalization for one text field.
///
/// Implementations are pure and cheap; fields call them redundantly.
pub trait Validator {
    /// Whether an edit producing `candidate` may be applied.
    fn admit(&self, _candidate: &str) -> bool {
        true
    }

    fn status(&self, text: &str, on_exit: bool) -> ErrorStatus;

    fn normalize(&self, text: &str, _status: &ErrorStatus) -> String {
        text.to_string()
    }

    fn is_mandatory(&self) -> bool;
}

/// Accepts any text; only a blank mandatory field is an error, and only on exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatoryValidator {
    mandatory: bool,
}

impl MandatoryValidator {
    pub fn new(mandatory: bool) -> Self {
        Self { mandatory }
    }
}

impl Validator for MandatoryValidator {
    fn status(&self, text: &str, on_exit: bool) -> ErrorStatus {
        blank_status(text.is_empty(), self.mandatory, on_exit)
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}

/// Status of a text that denotes "no value".
fn blank_status(blank: bool, mandatory: bool, on_exit: bool) -> ErrorStatus {
    if blank && mandatory && on_exit {
        ErrorStatus::Mandatory
    } else {
        ErrorStatus::Valid
    }
}
