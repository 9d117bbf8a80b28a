//! Text editing and validation building blocks for metaform.
//!
//! - [`text`] - Buffers and shared state for single-line text content
//! - [`validation`] - The admit/status/normalize validator protocol and its
//!   integral, floating, text-length, date and mandatory implementations
//! - [`ValidatedTextField`] - A text state wired to a validator

pub mod text;
pub mod validation;

mod validated_field;

pub use validated_field::ValidatedTextField;
pub use validation::{ErrorStatus, InvalidKind, Validator};
