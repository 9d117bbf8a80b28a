//! Bean metadata for metaform.
//!
//! This crate is the descriptor source of the form layer: an explicit,
//! pre-built table of a bean type's properties with their declared types,
//! declared constraints and accessor functions. Nothing here is discovered by
//! introspection; bean authors build the table once with [`BeanMeta::builder`].
//!
//! # Core Types
//!
//! - [`DeclaredType`] - Semantic kind of a property, used as a registry key
//! - [`Value`] - Dynamically typed property value
//! - [`Constraints`] - Declared not-null, range and size metadata
//! - [`PropertyDescriptor`] - One property with getter and setter
//! - [`BeanMeta`] - Ordered property table of a bean type
//! - [`StringConvert`] - Value to text conversion service

mod bean;
mod constraint;
mod convert;
mod error;
mod property;
mod types;
mod value;

pub use bean::{cached_meta, Bean, BeanMeta, BeanMetaBuilder, MetaSlot};
pub use constraint::{Constraints, SizeConstraint, ValidateRule};
pub use convert::{format_float, DefaultStringConvert, StringConvert, DATE_FORMAT};
pub use error::{ConversionError, MetaError, ValueError};
pub use property::{extract, Getter, PropertyDescriptor, Setter, UiName};
pub use types::{DeclaredType, EnumType, FloatWidth, IntWidth, Primitive};
pub use value::{Bound, Value};

pub use chrono::NaiveDate;
