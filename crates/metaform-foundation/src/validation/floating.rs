use super::{blank_status, ErrorStatus, InvalidKind, Validator};
use metaform_meta::{format_float, FloatWidth};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Longest text a floating field accepts.
const MAX_TEXT_LEN: usize = 128;

/// Floating point numbers, including the `NaN` and `Infinity` spellings.
///
/// Typing is limited to digits, `.`, signs, an exponent marker and a single
/// trailing type suffix (`f` or `d`), or a prefix of one of the spellings.
/// While editing, a lone sign or point, a dangling exponent marker and any
/// spelling prefix are accepted. On exit the text is repaired before it is
/// judged: spelling prefixes are completed, the suffix and a dangling exponent
/// marker are dropped. A `+` is only accepted in front of the number or its
/// exponent, and normalization removes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingValidator {
    width: FloatWidth,
    mandatory: bool,
    allow_nan: bool,
    min: f64,
    max: f64,
}

impl FloatingValidator {
    /// Unbounded, `NaN` allowed.
    pub fn new(width: FloatWidth, mandatory: bool) -> Self {
        Self {
            width,
            mandatory,
            allow_nan: true,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn allow_nan(mut self, allow: bool) -> Self {
        self.allow_nan = allow;
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn width(&self) -> FloatWidth {
        self.width
    }

    fn is_blank(text: &str) -> bool {
        matches!(text, "" | "+" | "-" | "." | "e" | "E")
    }

    fn is_spelling_prefix(text: &str) -> bool {
        NAN.starts_with(text) || INFINITY.starts_with(text) || NEG_INFINITY.starts_with(text)
    }

    /// Incomplete input that is tolerated while the user is still typing.
    fn is_transitional(text: &str) -> bool {
        if Self::is_blank(text) || Self::is_spelling_prefix(text) {
            return true;
        }
        let upper = text.to_ascii_uppercase();
        let marker = upper.trim_end_matches(['+', '-']);
        upper.len() - marker.len() <= 1 && marker.ends_with('E') && !marker.ends_with("EE")
    }

    fn parse(&self, text: &str) -> Option<f64> {
        match text {
            NAN => Some(f64::NAN),
            INFINITY => Some(f64::INFINITY),
            NEG_INFINITY => Some(f64::NEG_INFINITY),
            _ => {
                let value = match self.width {
                    FloatWidth::F32 => text.parse::<f32>().ok()? as f64,
                    FloatWidth::F64 => text.parse::<f64>().ok()?,
                };
                // A finite literal too large for the width.
                (!value.is_infinite()).then_some(value)
            }
        }
    }
}

/// Completes spelling prefixes and drops the type suffix and a dangling
/// exponent marker. Signs are left for the parser to judge.
fn repair(text: &str) -> String {
    if !text.is_empty() {
        for spelling in [NAN, INFINITY, NEG_INFINITY] {
            if spelling.starts_with(text) {
                return spelling.to_string();
            }
        }
    }
    let mut repaired = text.to_string();
    if repaired.ends_with(['f', 'F', 'd', 'D']) {
        repaired.pop();
    }
    for dangling in ["e", "E", "e+", "E+", "e-", "E-"] {
        if let Some(number) = repaired.strip_suffix(dangling) {
            repaired = number.to_string();
            break;
        }
    }
    repaired.replace('E', "e")
}

/// Removes explicit `+` signs and a redundant `.0` from the mantissa.
fn tidy(text: &str) -> String {
    let mut tidied = text.replace("e+", "e");
    if tidied.starts_with('+') {
        tidied.remove(0);
    }
    if let Some(pos) = tidied.find(".0e") {
        if pos > 0 && tidied.as_bytes()[pos - 1].is_ascii_digit() {
            tidied.replace_range(pos..pos + 2, "");
        }
    }
    let len = tidied.len();
    if len > 2 && tidied.ends_with(".0") && tidied.as_bytes()[len - 3].is_ascii_digit() {
        tidied.truncate(len - 2);
    }
    tidied
}

impl Validator for FloatingValidator {
    fn admit(&self, candidate: &str) -> bool {
        if Self::is_spelling_prefix(candidate) {
            return true;
        }
        if candidate.chars().count() > MAX_TEXT_LEN {
            return false;
        }
        let body = candidate
            .strip_suffix(['f', 'F', 'd', 'D'])
            .unwrap_or(candidate);
        body.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, 'e' | 'E' | '.' | '+' | '-'))
    }

    fn status(&self, text: &str, on_exit: bool) -> ErrorStatus {
        if Self::is_blank(text) {
            return blank_status(true, self.mandatory, on_exit);
        }
        if !on_exit && Self::is_transitional(text) {
            return ErrorStatus::Valid;
        }
        let Some(value) = self.parse(&repair(text)) else {
            return ErrorStatus::Invalid(InvalidKind::Floating(self.width));
        };
        if value.is_nan() {
            return if self.allow_nan {
                ErrorStatus::Valid
            } else {
                ErrorStatus::Invalid(InvalidKind::NotANumber)
            };
        }
        if value < self.min || value > self.max {
            return ErrorStatus::range(
                format_float(self.min, self.width),
                format_float(self.max, self.width),
            );
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
        tidy(&repair(text))
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn double() -> FloatingValidator {
        FloatingValidator::new(FloatWidth::F64, false)
    }

    fn exit(validator: &FloatingValidator, text: &str) -> (ErrorStatus, String) {
        let status = validator.status(text, true);
        let normalized = validator.normalize(text, &status);
        (status, normalized)
    }

    #[test]
    fn admits_numeric_characters_and_spellings() {
        let validator = double();
        assert!(validator.admit("-1.5e+3"));
        assert!(validator.admit("2.5d"));
        assert!(validator.admit("Inf"));
        assert!(validator.admit("-Infinity"));
        assert!(validator.admit("Na"));
        assert!(!validator.admit("NaNa"));
        assert!(!validator.admit("1x"));
        assert!(!validator.admit("1fd"));
        assert!(!validator.admit(&"1".repeat(MAX_TEXT_LEN + 1)));
    }

    #[test]
    fn lone_minus_is_blank() {
        let validator = double();
        assert_eq!(validator.status("-", false), ErrorStatus::Valid);
        assert_eq!(exit(&validator, "-"), (ErrorStatus::Valid, String::new()));
        let required = FloatingValidator::new(FloatWidth::F64, true);
        assert_eq!(required.status("-", true), ErrorStatus::Mandatory);
        assert_eq!(required.status(".", false), ErrorStatus::Valid);
    }

    #[test]
    fn transitional_text_only_while_editing() {
        let validator = double();
        assert_eq!(validator.status("1e", false), ErrorStatus::Valid);
        assert_eq!(validator.status("1e+", false), ErrorStatus::Valid);
        assert_eq!(validator.status("2E-", false), ErrorStatus::Valid);
        assert!(validator.status("1e+-", false).is_error());
        assert_eq!(validator.status("Infin", false), ErrorStatus::Valid);
        assert_eq!(validator.status("1ee", false), ErrorStatus::Invalid(InvalidKind::Floating(FloatWidth::F64)));
        assert_eq!(validator.status("1..2", true), ErrorStatus::Invalid(InvalidKind::Floating(FloatWidth::F64)));
    }

    #[test]
    fn exit_completes_and_canonicalizes() {
        let validator = double();
        assert_eq!(exit(&validator, "Inf").1, "Infinity");
        assert_eq!(exit(&validator, "-Inf").1, "-Infinity");
        assert_eq!(exit(&validator, "N").1, "NaN");
        assert_eq!(exit(&validator, "+1.5").1, "1.5");
        assert_eq!(exit(&validator, "10.0").1, "10");
        assert_eq!(exit(&validator, "2.0d").1, "2");
        assert_eq!(exit(&validator, "3f").1, "3");
        assert_eq!(exit(&validator, "1.0E5").1, "1e5");
        assert_eq!(exit(&validator, "4E").1, "4");
        assert_eq!(exit(&validator, "4e-").1, "4");
        assert_eq!(exit(&validator, "1e+5").1, "1e5");
        assert_eq!(exit(&validator, "+1E+5").1, "1e5");
        assert_eq!(exit(&validator, ".0").1, ".0");
        assert_eq!(exit(&validator, "1.50").1, "1.50");
    }

    #[test]
    fn invalid_text_is_left_alone() {
        let validator = double();
        let (status, normalized) = exit(&validator, "1.2.3");
        assert!(status.is_error());
        assert_eq!(normalized, "1.2.3");
    }

    #[test]
    fn misplaced_plus_is_invalid() {
        let validator = double();
        let invalid = ErrorStatus::Invalid(InvalidKind::Floating(FloatWidth::F64));
        for text in ["1+2", "+-1", "1++5", "++1", "1e++5", "1.5+"] {
            assert!(validator.admit(text), "{text}");
            let (status, normalized) = exit(&validator, text);
            assert_eq!(status, invalid, "{text}");
            assert_eq!(normalized, text);
        }
    }

    #[test]
    fn lone_exponent_marker_is_blank() {
        let validator = double();
        assert_eq!(exit(&validator, "e"), (ErrorStatus::Valid, String::new()));
        assert_eq!(exit(&validator, "E"), (ErrorStatus::Valid, String::new()));
        let required = FloatingValidator::new(FloatWidth::F64, true);
        assert_eq!(required.status("E", true), ErrorStatus::Mandatory);
        assert_eq!(required.status("e", false), ErrorStatus::Valid);
    }

    #[test]
    fn nan_can_be_forbidden() {
        let validator = double().allow_nan(false);
        assert_eq!(validator.status("Na", false), ErrorStatus::Valid);
        assert_eq!(validator.status("NaN", true), ErrorStatus::Invalid(InvalidKind::NotANumber));
    }

    #[test]
    fn bounds_are_inclusive() {
        let validator = double().with_bounds(0.0, 1.0);
        assert_eq!(validator.status("1", true), ErrorStatus::Valid);
        assert_eq!(validator.status("0.0", true), ErrorStatus::Valid);
        assert_eq!(validator.status("1.5", true), ErrorStatus::Range("0 - 1".into()));
        assert!(validator.status("-Infinity", true).is_error());
    }

    #[test]
    fn float_width_overflow_is_invalid() {
        let validator = FloatingValidator::new(FloatWidth::F32, false);
        assert_eq!(validator.status("1e39", true), ErrorStatus::Invalid(InvalidKind::Floating(FloatWidth::F32)));
        assert_eq!(validator.status("1e38", true), ErrorStatus::Valid);
        assert_eq!(double().status("1e39", true), ErrorStatus::Valid);
    }

    proptest! {
        #[test]
        fn normalization_keeps_valid_text_valid(text in "[0-9eE.+-]{0,10}[fd]?") {
            let validator = double();
            prop_assume!(validator.admit(&text));
            let status = validator.status(&text, true);
            if status.is_valid() {
                let once = validator.normalize(&text, &status);
                prop_assert!(validator.status(&once, true).is_valid(), "{:?} -> {:?}", text, once);
                prop_assert!(!once.contains('+'), "{:?} -> {:?}", text, once);
                prop_assert_eq!(validator.normalize(&once, &ErrorStatus::Valid), once.clone());
            }
        }

        #[test]
        fn interior_plus_never_passes_exit(head in "[0-9.]{1,6}", tail in "[0-9]{0,6}") {
            let text = format!("{head}+{tail}");
            let status = double().status(&text, true);
            prop_assert!(status.is_error(), "{:?} -> {:?}", text, status);
        }

        #[test]
        fn status_never_panics_on_admitted_text(text in "\\PC{0,16}", on_exit in any::<bool>()) {
            let validator = double();
            if validator.admit(&text) {
                let _ = validator.status(&text, on_exit);
            }
        }
    }
}
