//! String conversion between property values and their text form.

use crate::{ConversionError, DeclaredType, FloatWidth, IntWidth, Primitive, Value};
use chrono::NaiveDate;

/// Canonical spelling of a date value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts values to and from the text shown in an input field.
pub trait StringConvert {
    fn value_to_string(&self, value: &Value, declared: &DeclaredType) -> Result<String, ConversionError>;

    fn string_to_value(&self, text: &str, declared: &DeclaredType) -> Result<Value, ConversionError>;
}

/// Canonical conversions for every [`DeclaredType`] except nested beans.
///
/// Empty text converts to `Value::Null` for nullable types. Floats use the
/// `NaN`, `Infinity` and `-Infinity` spellings and omit a trailing `.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStringConvert;

impl StringConvert for DefaultStringConvert {
    fn value_to_string(&self, value: &Value, declared: &DeclaredType) -> Result<String, ConversionError> {
        let text = match value {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format_float(*v, declared.float_width().unwrap_or(FloatWidth::F64)),
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format(DATE_FORMAT).to_string(),
            Value::Enum(member) => (*member).to_string(),
            Value::List(items) => items.join(", "),
        };
        Ok(text)
    }

    fn string_to_value(&self, text: &str, declared: &DeclaredType) -> Result<Value, ConversionError> {
        if text.is_empty() && declared.is_nullable() && *declared != DeclaredType::Text {
            return Ok(Value::Null);
        }
        let parse_error = || ConversionError::Parse {
            text: text.to_string(),
            target: *declared,
        };
        match declared {
            DeclaredType::Primitive(p) | DeclaredType::Boxed(p) => match p {
                Primitive::Bool => match text {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    _ => Err(parse_error()),
                },
                Primitive::I8 => parse_int(text, IntWidth::I8).ok_or_else(parse_error),
                Primitive::I16 => parse_int(text, IntWidth::I16).ok_or_else(parse_error),
                Primitive::I32 => parse_int(text, IntWidth::I32).ok_or_else(parse_error),
                Primitive::I64 => parse_int(text, IntWidth::I64).ok_or_else(parse_error),
                Primitive::F32 => parse_float(text, FloatWidth::F32).ok_or_else(parse_error),
                Primitive::F64 => parse_float(text, FloatWidth::F64).ok_or_else(parse_error),
            },
            DeclaredType::Text | DeclaredType::Named(_) => Ok(Value::Text(text.to_string())),
            DeclaredType::Date => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Value::Date)
                .map_err(|_| parse_error()),
            DeclaredType::Enum(e) => e.member(text).map(Value::Enum).ok_or_else(parse_error),
            DeclaredType::TextList => Ok(Value::List(
                text.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )),
            DeclaredType::Bean(_) => Err(ConversionError::Unsupported(*declared)),
        }
    }
}

fn parse_int(text: &str, width: IntWidth) -> Option<Value> {
    let value: i64 = text.parse().ok()?;
    (width.min()..=width.max())
        .contains(&value)
        .then_some(Value::Int(value))
}

fn parse_float(text: &str, width: FloatWidth) -> Option<Value> {
    let value = match text {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => match width {
            FloatWidth::F32 => text.parse::<f32>().ok()? as f64,
            FloatWidth::F64 => text.parse::<f64>().ok()?,
        },
    };
    Some(Value::Float(value))
}

/// Magnitudes at or above this are written with an exponent.
const EXPONENT_ABOVE: f64 = 1e16;
/// Non-zero magnitudes below this are written with an exponent.
const EXPONENT_BELOW: f64 = 1e-3;

/// Formats a float the way an input field displays it.
///
/// Very large and very small magnitudes use exponent notation (`1e300`,
/// `2.5e-7`) so the text stays short enough to edit.
pub fn format_float(value: f64, width: FloatWidth) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let spelling = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return spelling.to_string();
    }
    let magnitude = value.abs();
    let exponent = magnitude >= EXPONENT_ABOVE || (magnitude > 0.0 && magnitude < EXPONENT_BELOW);
    match (width, exponent) {
        (FloatWidth::F32, false) => (value as f32).to_string(),
        (FloatWidth::F32, true) => format!("{:e}", value as f32),
        (FloatWidth::F64, false) => value.to_string(),
        (FloatWidth::F64, true) => format!("{value:e}"),
    }
}
