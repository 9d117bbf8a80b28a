use crate::ComponentFactory;
use metaform_meta::{Bound, DeclaredType, MetaError};
use thiserror::Error as ThisError;

/// Programming errors raised while synthesizing or assembling a form.
///
/// User input never produces a `FormError`; it is reported per field as an
/// [`ErrorStatus`](metaform_foundation::ErrorStatus).
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum FormError {
    #[error(transparent)]
    Meta(#[from] MetaError),

    #[error("`{property}` declares minimum {min} above maximum {max}")]
    InvertedBounds {
        property: &'static str,
        min: Bound,
        max: Bound,
    },

    #[error("`{property}` declares size minimum {min} above maximum {max}")]
    InvertedSize {
        property: &'static str,
        min: usize,
        max: usize,
    },

    #[error("`{property}` is a {type_name} but no code list is configured for it")]
    MissingCodeList {
        property: &'static str,
        type_name: &'static str,
    },

    #[error("{factory:?} factory cannot handle type {declared}")]
    UnsupportedType {
        factory: ComponentFactory,
        declared: DeclaredType,
    },
}
