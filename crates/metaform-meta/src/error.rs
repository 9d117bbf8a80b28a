use crate::DeclaredType;
use thiserror::Error as ThisError;

/// Malformed bean metadata, detected while building a property table.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum MetaError {
    #[error("bean '{bean}' declares a property with an empty name")]
    EmptyPropertyName { bean: &'static str },

    #[error("bean '{bean}' declares property '{property}' more than once")]
    DuplicateProperty {
        bean: &'static str,
        property: &'static str,
    },

    #[error("property '{bean}.{property}' of type {declared} cannot carry a size constraint")]
    MisplacedSize {
        bean: &'static str,
        property: &'static str,
        declared: DeclaredType,
    },
}

/// A setter received a value of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValueError {
    #[error("property '{property}' expects {expected}, got {found}")]
    TypeMismatch {
        property: &'static str,
        expected: DeclaredType,
        found: &'static str,
    },

    #[error("value {value} is out of range for property '{property}'")]
    OutOfRange { property: &'static str, value: i64 },

    #[error("'{member}' is not a member of {enum_name}")]
    UnknownMember {
        enum_name: &'static str,
        member: String,
    },
}

/// Failure of the string conversion service.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ConversionError {
    #[error("cannot parse '{text}' as {target}")]
    Parse { text: String, target: DeclaredType },

    #[error("no string form for {value_kind} as {target}")]
    Unrepresentable {
        value_kind: &'static str,
        target: DeclaredType,
    },

    #[error("type {0} has no string conversion")]
    Unsupported(DeclaredType),
}
