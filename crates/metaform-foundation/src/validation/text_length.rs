use super::{blank_status, ErrorStatus, Validator};

/// Free text with a length limit, counted in chars.
///
/// Text longer than `max_size` cannot be typed. A non-blank text shorter than
/// `min_size` is a range error, reported only on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLengthValidator {
    mandatory: bool,
    min_size: usize,
    max_size: usize,
}

impl TextLengthValidator {
    pub fn new(mandatory: bool, min_size: usize, max_size: usize) -> Self {
        Self {
            mandatory,
            min_size,
            max_size,
        }
    }

    /// No length limit.
    pub fn unbounded(mandatory: bool) -> Self {
        Self::new(mandatory, 0, usize::MAX)
    }
}

impl Validator for TextLengthValidator {
    fn admit(&self, candidate: &str) -> bool {
        candidate.chars().count() <= self.max_size
    }

    fn status(&self, text: &str, on_exit: bool) -> ErrorStatus {
        if text.is_empty() {
            return blank_status(true, self.mandatory, on_exit);
        }
        let len = text.chars().count();
        if on_exit && (len < self.min_size || len > self.max_size) {
            return ErrorStatus::range(self.min_size, self.max_size);
        }
        ErrorStatus::Valid
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}
