use super::{blank_status, ErrorStatus, InvalidKind, Validator};
use metaform_meta::IntWidth;

/// Whole numbers of a fixed width, optionally bounded.
///
/// Only digits and signs can be typed, up to the width's literal length.
/// `""`, `"+"` and `"-"` count as blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegralValidator {
    width: IntWidth,
    mandatory: bool,
    min: i64,
    max: i64,
}

impl IntegralValidator {
    /// Bounded by the width's own limits.
    pub fn new(width: IntWidth, mandatory: bool) -> Self {
        Self {
            width,
            mandatory,
            min: width.min(),
            max: width.max(),
        }
    }

    /// Inclusive bounds, narrowed to the width.
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = self.width.saturate(min);
        self.max = self.width.saturate(max);
        self
    }

    pub fn width(&self) -> IntWidth {
        self.width
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn in_range(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn is_blank(text: &str) -> bool {
        matches!(text, "" | "+" | "-")
    }
}

impl Validator for IntegralValidator {
    fn admit(&self, candidate: &str) -> bool {
        candidate.len() <= self.width.max_text_len()
            && candidate
                .chars()
                .all(|c| c.is_ascii_digit() || c == '+' || c == '-')
    }

    fn status(&self, text: &str, on_exit: bool) -> ErrorStatus {
        if Self::is_blank(text) {
            return blank_status(true, self.mandatory, on_exit);
        }
        let invalid = ErrorStatus::Invalid(InvalidKind::Integral(self.width));
        let Ok(value) = text.parse::<i64>() else {
            return invalid;
        };
        if value < self.width.min() || value > self.width.max() {
            return invalid;
        }
        if !self.in_range(value) {
            return ErrorStatus::range(self.min, self.max);
        }
        ErrorStatus::Valid
    }

    fn normalize(&self, text: &str, status: &ErrorStatus) -> String {
        if !status.is_valid() {
            return text.to_string();
        }
        if Self::is_blank(text) {
            return String::new();
        }
        text.replace('+', "")
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn percent() -> IntegralValidator {
        IntegralValidator::new(IntWidth::I32, false).with_bounds(0, 100)
    }

    #[test]
    fn admits_digits_and_signs_only() {
        let validator = IntegralValidator::new(IntWidth::I8, false);
        assert!(validator.admit(""));
        assert!(validator.admit("-128"));
        assert!(validator.admit("+0127"));
        assert!(!validator.admit("+00127"));
        assert!(!validator.admit("1a"));
        assert!(!validator.admit("1.5"));
    }

    #[test]
    fn typing_into_bounded_field() {
        let validator = percent();
        assert_eq!(validator.status("1", false), ErrorStatus::Valid);
        assert_eq!(validator.status("50", false), ErrorStatus::Valid);
        let status = validator.status("150", true);
        assert_eq!(status, ErrorStatus::Range("0 - 100".into()));
        assert_eq!(validator.normalize("150", &status), "150");
    }

    #[test]
    fn endpoints_are_in_range() {
        let validator = percent();
        assert_eq!(validator.status("0", true), ErrorStatus::Valid);
        assert_eq!(validator.status("100", true), ErrorStatus::Valid);
        assert!(validator.status("-1", true).is_error());
        assert!(validator.status("101", true).is_error());
    }

    #[test]
    fn malformed_and_overflowing_text_is_invalid() {
        let validator = IntegralValidator::new(IntWidth::I16, false);
        let invalid = ErrorStatus::Invalid(InvalidKind::Integral(IntWidth::I16));
        assert_eq!(validator.status("1-2", false), invalid);
        assert_eq!(validator.status("--1", false), invalid);
        assert_eq!(validator.status("32768", false), invalid);
        assert_eq!(validator.status("-32768", false), ErrorStatus::Valid);
        let long = IntegralValidator::new(IntWidth::I64, false);
        assert!(long.status("99999999999999999999", true).is_error());
    }

    #[test]
    fn blank_equivalents() {
        let optional = IntegralValidator::new(IntWidth::I32, false);
        let required = IntegralValidator::new(IntWidth::I32, true);
        for blank in ["", "+", "-"] {
            assert_eq!(optional.status(blank, false), ErrorStatus::Valid);
            assert_eq!(optional.status(blank, true), ErrorStatus::Valid);
            assert_eq!(optional.normalize(blank, &ErrorStatus::Valid), "");
            assert_eq!(required.status(blank, false), ErrorStatus::Valid);
            assert_eq!(required.status(blank, true), ErrorStatus::Mandatory);
        }
    }

    #[test]
    fn normalize_strips_plus() {
        let validator = IntegralValidator::new(IntWidth::I32, false);
        assert_eq!(validator.normalize("+42", &ErrorStatus::Valid), "42");
        assert_eq!(validator.normalize("-7", &ErrorStatus::Valid), "-7");
    }

    #[test]
    fn declared_bounds_saturate_to_width() {
        let validator = IntegralValidator::new(IntWidth::I8, true).with_bounds(-1000, 1000);
        assert_eq!(validator.bounds(), (-128, 127));
    }

    proptest! {
        #[test]
        fn in_range_matches_inclusive_bounds(min in -500i64..500, span in 0i64..500, v in -1500i64..1500) {
            let max = min + span;
            let validator = IntegralValidator::new(IntWidth::I32, false).with_bounds(min, max);
            let valid = validator.status(&v.to_string(), true).is_valid();
            prop_assert_eq!(valid, min <= v && v <= max);
        }

        #[test]
        fn admitted_text_normalizes_consistently(text in "[0-9+-]{0,12}") {
            let validator = IntegralValidator::new(IntWidth::I32, false);
            prop_assume!(validator.admit(&text));
            let status = validator.status(&text, true);
            if status.is_valid() {
                let once = validator.normalize(&text, &status);
                prop_assert!(validator.status(&once, true).is_valid());
                prop_assert_eq!(validator.normalize(&once, &ErrorStatus::Valid), once.clone());
            }
        }
    }
}
