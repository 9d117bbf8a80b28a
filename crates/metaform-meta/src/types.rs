//! Declared types of bean properties.
//!
//! A [`DeclaredType`] is the semantic kind of a property as the form layer sees
//! it. It is the key of the component registry, so equality is exact: a boxed
//! `i32` and a primitive `i32` are different types.

use std::fmt;

/// Scalar kinds with a fixed machine representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl Primitive {
    /// Returns the integral width, if this is an integral kind.
    pub fn int_width(self) -> Option<IntWidth> {
        match self {
            Primitive::I8 => Some(IntWidth::I8),
            Primitive::I16 => Some(IntWidth::I16),
            Primitive::I32 => Some(IntWidth::I32),
            Primitive::I64 => Some(IntWidth::I64),
            _ => None,
        }
    }

    /// Returns the floating width, if this is a floating kind.
    pub fn float_width(self) -> Option<FloatWidth> {
        match self {
            Primitive::F32 => Some(FloatWidth::F32),
            Primitive::F64 => Some(FloatWidth::F64),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
        }
    }
}

/// Width of an integral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    pub const fn min(self) -> i64 {
        match self {
            IntWidth::I8 => i8::MIN as i64,
            IntWidth::I16 => i16::MIN as i64,
            IntWidth::I32 => i32::MIN as i64,
            IntWidth::I64 => i64::MIN,
        }
    }

    pub const fn max(self) -> i64 {
        match self {
            IntWidth::I8 => i8::MAX as i64,
            IntWidth::I16 => i16::MAX as i64,
            IntWidth::I32 => i32::MAX as i64,
            IntWidth::I64 => i64::MAX,
        }
    }

    /// Longest literal an input field of this width accepts, sign included.
    ///
    /// Leaves a little slack over the widest decimal literal so that a user
    /// can type leading zeros or an explicit `+`.
    pub const fn max_text_len(self) -> usize {
        match self {
            IntWidth::I8 => 5,
            IntWidth::I16 => 7,
            IntWidth::I32 => 12,
            IntWidth::I64 => 21,
        }
    }

    /// Narrows a declared bound to this width, saturating at the width's limits.
    pub fn saturate(self, value: i64) -> i64 {
        value.clamp(self.min(), self.max())
    }

    /// Name used in message keys, e.g. `Error.Integer.invalid`.
    pub const fn label(self) -> &'static str {
        match self {
            IntWidth::I8 => "Byte",
            IntWidth::I16 => "Short",
            IntWidth::I32 => "Integer",
            IntWidth::I64 => "Long",
        }
    }
}

/// Width of a floating point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    pub const fn label(self) -> &'static str {
        match self {
            FloatWidth::F32 => "Float",
            FloatWidth::F64 => "Double",
        }
    }
}

/// A closed enumeration with members in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumType {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl EnumType {
    pub const fn new(name: &'static str, members: &'static [&'static str]) -> Self {
        Self { name, members }
    }

    /// Looks up a member by name, returning the interned member string.
    pub fn member(&self, name: &str) -> Option<&'static str> {
        self.members.iter().copied().find(|m| *m == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| *m == name)
    }
}

/// Semantic kind of a bean property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// Non-nullable scalar.
    Primitive(Primitive),
    /// Nullable scalar.
    Boxed(Primitive),
    Text,
    Date,
    Enum(EnumType),
    /// Nested bean, identified by type name.
    Bean(&'static str),
    /// Ordered list of strings.
    TextList,
    /// Opaque scalar that only the string converter understands.
    Named(&'static str),
}

impl DeclaredType {
    pub const BOOL: DeclaredType = DeclaredType::Primitive(Primitive::Bool);
    pub const I8: DeclaredType = DeclaredType::Primitive(Primitive::I8);
    pub const I16: DeclaredType = DeclaredType::Primitive(Primitive::I16);
    pub const I32: DeclaredType = DeclaredType::Primitive(Primitive::I32);
    pub const I64: DeclaredType = DeclaredType::Primitive(Primitive::I64);
    pub const F32: DeclaredType = DeclaredType::Primitive(Primitive::F32);
    pub const F64: DeclaredType = DeclaredType::Primitive(Primitive::F64);

    /// True for non-nullable scalars.
    pub fn is_primitive(&self) -> bool {
        matches!(self, DeclaredType::Primitive(_))
    }

    /// True when `Value::Null` is a legal value of this type.
    pub fn is_nullable(&self) -> bool {
        !self.is_primitive()
    }

    /// Underlying scalar kind of a primitive or boxed type.
    pub fn scalar(&self) -> Option<Primitive> {
        match self {
            DeclaredType::Primitive(p) | DeclaredType::Boxed(p) => Some(*p),
            _ => None,
        }
    }

    pub fn int_width(&self) -> Option<IntWidth> {
        self.scalar().and_then(Primitive::int_width)
    }

    pub fn float_width(&self) -> Option<FloatWidth> {
        self.scalar().and_then(Primitive::float_width)
    }

    pub fn is_bool(&self) -> bool {
        self.scalar() == Some(Primitive::Bool)
    }

    pub fn enum_type(&self) -> Option<EnumType> {
        match self {
            DeclaredType::Enum(e) => Some(*e),
            _ => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Primitive(p) => f.write_str(p.name()),
            DeclaredType::Boxed(p) => write!(f, "Option<{}>", p.name()),
            DeclaredType::Text => f.write_str("String"),
            DeclaredType::Date => f.write_str("NaiveDate"),
            DeclaredType::Enum(e) => f.write_str(e.name),
            DeclaredType::Bean(name) | DeclaredType::Named(name) => f.write_str(name),
            DeclaredType::TextList => f.write_str("Vec<String>"),
        }
    }
}
