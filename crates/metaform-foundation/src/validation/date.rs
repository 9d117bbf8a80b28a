use super::{blank_status, ErrorStatus, InvalidKind, Validator};
use metaform_meta::{NaiveDate, DATE_FORMAT};

const MAX_TEXT_LEN: usize = 10;

/// Calendar dates typed as `YYYY-MM-DD`.
///
/// Anything made of digits and dashes is tolerated while typing; on exit the
/// text must name a real date and is rewritten zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValidator {
    mandatory: bool,
}

impl DateValidator {
    pub fn new(mandatory: bool) -> Self {
        Self { mandatory }
    }

    fn parse(text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
    }
}

impl Validator for DateValidator {
    fn admit(&self, candidate: &str) -> bool {
        candidate.len() <= MAX_TEXT_LEN && candidate.chars().all(|c| c.is_ascii_digit() || c == '-')
    }

    fn status(&self, text: &str, on_exit: bool) -> ErrorStatus {
        if text.is_empty() {
            return blank_status(true, self.mandatory, on_exit);
        }
        if !on_exit || Self::parse(text).is_some() {
            ErrorStatus::Valid
        } else {
            ErrorStatus::Invalid(InvalidKind::Date)
        }
    }

    fn normalize(&self, text: &str, status: &ErrorStatus) -> String {
        match Self::parse(text) {
            Some(date) if status.is_valid() => date.format(DATE_FORMAT).to_string(),
            _ => text.to_string(),
        }
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}
