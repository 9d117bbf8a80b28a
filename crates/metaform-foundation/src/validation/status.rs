use metaform_meta::{FloatWidth, IntWidth};
use std::fmt;

/// Why a text could not be read as a value of the field's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidKind {
    Integral(IntWidth),
    Floating(FloatWidth),
    /// `NaN` in a field that does not allow it.
    NotANumber,
    Date,
    /// The string converter refused the text.
    Conversion,
}

impl InvalidKind {
    pub const fn message_key(self) -> &'static str {
        match self {
            InvalidKind::Integral(IntWidth::I8) => "Error.Byte.invalid",
            InvalidKind::Integral(IntWidth::I16) => "Error.Short.invalid",
            InvalidKind::Integral(IntWidth::I32) => "Error.Integer.invalid",
            InvalidKind::Integral(IntWidth::I64) => "Error.Long.invalid",
            InvalidKind::Floating(FloatWidth::F32) => "Error.Float.invalid",
            InvalidKind::Floating(FloatWidth::F64) => "Error.Double.invalid",
            InvalidKind::NotANumber => "Error.NaN",
            InvalidKind::Date => "Error.Date.invalid",
            InvalidKind::Conversion => "Error.invalid",
        }
    }
}

/// Validation state of one field.
///
/// A field carries exactly one status at a time. Everything except
/// [`Valid`](Self::Valid) is an error shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    #[default]
    Valid,
    /// Blank on exit in a field that requires a value.
    Mandatory,
    Invalid(InvalidKind),
    /// Readable but outside the allowed bounds; carries `"min - max"`.
    Range(String),
}

impl ErrorStatus {
    pub const MESSAGE_MANDATORY: &'static str = "Error.mandatory";
    pub const MESSAGE_RANGE: &'static str = "Error.range";

    /// Builds a range error showing the inclusive bounds.
    pub fn range(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        ErrorStatus::Range(format!("{min} - {max}"))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ErrorStatus::Valid)
    }

    pub fn is_error(&self) -> bool {
        !self.is_valid()
    }

    /// Key for the localized message; empty when valid.
    pub fn message_key(&self) -> &'static str {
        match self {
            ErrorStatus::Valid => "",
            ErrorStatus::Mandatory => Self::MESSAGE_MANDATORY,
            ErrorStatus::Invalid(kind) => kind.message_key(),
            ErrorStatus::Range(_) => Self::MESSAGE_RANGE,
        }
    }

    /// Extra information to substitute into the message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ErrorStatus::Range(info) => Some(info),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatus::Valid => f.write_str("valid"),
            ErrorStatus::Range(info) => write!(f, "{} ({info})", Self::MESSAGE_RANGE),
            other => f.write_str(other.message_key()),
        }
    }
}
