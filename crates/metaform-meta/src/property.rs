//! Property descriptors: the unit of bean metadata.

use crate::{Constraints, DeclaredType, Value, ValueError};
use std::fmt;

/// Reads a property from a bean.
pub type Getter<B> = fn(&B) -> Value;

/// Writes a property to a bean; fails when the value has the wrong shape.
pub type Setter<B> = fn(&mut B, Value) -> Result<(), ValueError>;

/// Identity of a property for display and resource lookup.
///
/// `name` is `Type.property`, `full_name` prefixes the module path of the
/// declaring type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiName {
    pub name: String,
    pub full_name: String,
}

/// Metadata and accessors of a single bean property.
pub struct PropertyDescriptor<B> {
    name: &'static str,
    bean_name: &'static str,
    module_path: &'static str,
    declared_type: DeclaredType,
    constraints: Constraints,
    getter: Getter<B>,
    setter: Setter<B>,
}

impl<B> PropertyDescriptor<B> {
    pub(crate) fn new(
        bean_name: &'static str,
        module_path: &'static str,
        name: &'static str,
        declared_type: DeclaredType,
        constraints: Constraints,
        getter: Getter<B>,
        setter: Setter<B>,
    ) -> Self {
        Self {
            name,
            bean_name,
            module_path,
            declared_type,
            constraints,
            getter,
            setter,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Simple name of the declaring bean type.
    pub fn bean_name(&self) -> &'static str {
        self.bean_name
    }

    pub fn declared_type(&self) -> DeclaredType {
        self.declared_type
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn get(&self, bean: &B) -> Value {
        (self.getter)(bean)
    }

    pub fn set(&self, bean: &mut B, value: Value) -> Result<(), ValueError> {
        (self.setter)(bean, value)
    }

    pub fn ui_name(&self) -> UiName {
        let name = format!("{}.{}", self.bean_name, self.name);
        let full_name = if self.module_path.is_empty() {
            name.clone()
        } else {
            format!("{}::{}", self.module_path, name)
        };
        UiName { name, full_name }
    }
}

impl<B> fmt::Debug for PropertyDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("bean", &self.bean_name)
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("constraints", &self.constraints)
            .finish()
    }
}

/// Conversions from [`Value`] used when writing setters.
///
/// Each helper reports a [`ValueError`] naming the property when the value has
/// the wrong shape.
pub mod extract {
    use crate::{DeclaredType, EnumType, Value, ValueError};
    use chrono::NaiveDate;

    fn mismatch(property: &'static str, expected: DeclaredType, value: &Value) -> ValueError {
        ValueError::TypeMismatch {
            property,
            expected,
            found: value.kind(),
        }
    }

    pub fn int<T: TryFrom<i64>>(
        property: &'static str,
        expected: DeclaredType,
        value: Value,
    ) -> Result<T, ValueError> {
        match value {
            Value::Int(v) => T::try_from(v).map_err(|_| ValueError::OutOfRange { property, value: v }),
            other => Err(mismatch(property, expected, &other)),
        }
    }

    pub fn opt_int<T: TryFrom<i64>>(
        property: &'static str,
        expected: DeclaredType,
        value: Value,
    ) -> Result<Option<T>, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => int(property, expected, other).map(Some),
        }
    }

    pub fn float(property: &'static str, expected: DeclaredType, value: Value) -> Result<f64, ValueError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            other => Err(mismatch(property, expected, &other)),
        }
    }

    pub fn boolean(property: &'static str, expected: DeclaredType, value: Value) -> Result<bool, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(property, expected, &other)),
        }
    }

    pub fn opt_boolean(
        property: &'static str,
        expected: DeclaredType,
        value: Value,
    ) -> Result<Option<bool>, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => boolean(property, expected, other).map(Some),
        }
    }

    /// Null maps to the empty string.
    pub fn text(property: &'static str, value: Value) -> Result<String, ValueError> {
        match value {
            Value::Null => Ok(String::new()),
            Value::Text(s) => Ok(s),
            other => Err(mismatch(property, DeclaredType::Text, &other)),
        }
    }

    pub fn opt_date(property: &'static str, value: Value) -> Result<Option<NaiveDate>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Date(d) => Ok(Some(d)),
            other => Err(mismatch(property, DeclaredType::Date, &other)),
        }
    }

    pub fn list(property: &'static str, value: Value) -> Result<Vec<String>, ValueError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => Ok(items),
            other => Err(mismatch(property, DeclaredType::TextList, &other)),
        }
    }

    /// Returns the interned member name, or `None` for a null value.
    pub fn member(
        property: &'static str,
        enum_type: EnumType,
        value: Value,
    ) -> Result<Option<&'static str>, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Enum(name) => enum_type
                .member(name)
                .map(Some)
                .ok_or_else(|| ValueError::UnknownMember {
                    enum_name: enum_type.name,
                    member: name.to_string(),
                }),
            other => Err(mismatch(property, DeclaredType::Enum(enum_type), &other)),
        }
    }
}
