//! Derivation of form descriptors from bean metadata.

use crate::{ComponentFactory, ComponentRegistry, FieldDescriptor, FormDescriptor, FormError};
use metaform_meta::{BeanMeta, Bound, DeclaredType, PropertyDescriptor};
use std::rc::Rc;

/// Builds one [`FieldDescriptor`] per bean property, in declaration order.
pub struct FormSynthesizer<'a> {
    registry: &'a ComponentRegistry,
}

impl<'a> FormSynthesizer<'a> {
    pub fn new(registry: &'a ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Describes every property of `bean`.
    ///
    /// Properties without a factory stay in the descriptor with
    /// `component_factory == None`; forms skip them.
    pub fn synthesize<B>(&self, bean: &Rc<BeanMeta<B>>) -> Result<FormDescriptor<B>, FormError> {
        let fields = bean
            .properties()
            .map(|property| self.describe(property))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("synthesized {} fields for {}", fields.len(), bean.name());
        Ok(FormDescriptor::new(Rc::clone(bean), fields))
    }

    fn describe<B>(&self, property: &Rc<PropertyDescriptor<B>>) -> Result<FieldDescriptor<B>, FormError> {
        let declared = property.declared_type();
        let constraints = property.constraints();

        let mandatory = declared.is_primitive()
            || constraints.not_null
            || constraints
                .validate
                .as_ref()
                .is_some_and(|rule| rule.requires_value());

        let (min, max) = numeric_bounds(&declared, constraints.min, constraints.max);
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FormError::InvertedBounds {
                    property: property.name(),
                    min,
                    max,
                });
            }
        }

        let (min_size, max_size) = constraints
            .size
            .map_or((0, usize::MAX), |size| (size.min, size.max));
        if min_size > max_size {
            return Err(FormError::InvertedSize {
                property: property.name(),
                min: min_size,
                max: max_size,
            });
        }

        let mut field = FieldDescriptor::new(Rc::clone(property))
            .with_mandatory(mandatory)
            .with_bounds(min, max)
            .with_size(min_size, max_size);
        if let Some(enum_type) = declared.enum_type() {
            field = field.with_selectable_values(enum_type.members.to_vec());
        }

        let factory = self.registry.resolve(&declared).or_else(|| {
            declared
                .enum_type()
                .map(|_| ComponentFactory::Choice)
        });
        match factory {
            Some(factory) => log::trace!("{}: {declared} -> {factory:?}", property.name()),
            None => log::debug!(
                "no component factory for {}.{} ({declared}); field skipped",
                property.bean_name(),
                property.name()
            ),
        }
        Ok(field.with_component_factory(factory))
    }
}

/// Integral bounds are always set, narrowed to the width. Floating bounds are
/// the infinities. Other types are unbounded.
fn numeric_bounds(
    declared: &DeclaredType,
    min: Option<i64>,
    max: Option<i64>,
) -> (Option<Bound>, Option<Bound>) {
    if let Some(width) = declared.int_width() {
        let min = min.map_or(width.min(), |v| width.saturate(v));
        let max = max.map_or(width.max(), |v| width.saturate(v));
        (Some(Bound::Int(min)), Some(Bound::Int(max)))
    } else if declared.float_width().is_some() {
        (
            Some(Bound::Float(f64::NEG_INFINITY)),
            Some(Bound::Float(f64::INFINITY)),
        )
    } else {
        (None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_meta::{extract, Constraints, EnumType, Primitive, ValidateRule, Value};

    const TONE: EnumType = EnumType::new("Tone", &["WARM", "COOL", "NEUTRAL"]);

    #[derive(Default)]
    struct Sample {
        count: i32,
        tone: Option<&'static str>,
    }

    fn sample_meta(count: Constraints) -> Rc<BeanMeta<Sample>> {
        let meta = BeanMeta::<Sample>::builder("Sample", "tests")
            .constrained(
                "count",
                DeclaredType::I32,
                count,
                |s| Value::Int(s.count.into()),
                |s, v| {
                    s.count = extract::int("count", DeclaredType::I32, v)?;
                    Ok(())
                },
            )
            .property(
                "tone",
                DeclaredType::Enum(TONE),
                |s| s.tone.map(Value::Enum).unwrap_or_default(),
                |s, v| {
                    s.tone = extract::member("tone", TONE, v)?;
                    Ok(())
                },
            )
            .build()
            .expect("valid table");
        Rc::new(meta)
    }

    #[test]
    fn primitive_int_and_nullable_enum() {
        let registry = ComponentRegistry::with_defaults();
        let form = FormSynthesizer::new(&registry)
            .synthesize(&sample_meta(Constraints::new()))
            .expect("synthesizes");
        let names: Vec<_> = form.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["count", "tone"]);

        let count = &form.fields()[0];
        assert!(count.is_mandatory());
        assert_eq!(count.min_value(), Some(Bound::Int(i32::MIN as i64)));
        assert_eq!(count.max_value(), Some(Bound::Int(i32::MAX as i64)));
        assert!(!count.is_limited_values());
        assert_eq!(count.component_factory(), Some(ComponentFactory::Integral));

        let tone = &form.fields()[1];
        assert!(!tone.is_mandatory());
        assert!(tone.is_limited_values());
        assert_eq!(tone.selectable_values(), Some(&["WARM", "COOL", "NEUTRAL"][..]));
        assert_eq!(tone.component_factory(), Some(ComponentFactory::Choice));
        assert_eq!(tone.min_value(), None);
    }

    #[test]
    fn declared_bounds_saturate_to_width() {
        let registry = ComponentRegistry::with_defaults();
        let form = FormSynthesizer::new(&registry)
            .synthesize(&sample_meta(Constraints::new().range(0, i64::MAX)))
            .expect("synthesizes");
        let count = &form.fields()[0];
        assert_eq!(count.min_value(), Some(Bound::Int(0)));
        assert_eq!(count.max_value(), Some(Bound::Int(i32::MAX as i64)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let registry = ComponentRegistry::with_defaults();
        let result =
            FormSynthesizer::new(&registry).synthesize(&sample_meta(Constraints::new().range(10, 1)));
        assert_eq!(
            result.map(|form| form.len()),
            Err(FormError::InvertedBounds {
                property: "count",
                min: Bound::Int(10),
                max: Bound::Int(1),
            })
        );
    }

    #[test]
    fn mandatory_is_additive() {
        struct Flags {
            a: Option<i64>,
        }
        fn get(f: &Flags) -> Value {
            f.a.into()
        }
        fn set(f: &mut Flags, v: Value) -> Result<(), metaform_meta::ValueError> {
            f.a = extract::opt_int("a", DeclaredType::Boxed(Primitive::I64), v)?;
            Ok(())
        }
        let boxed = DeclaredType::Boxed(Primitive::I64);
        let meta = BeanMeta::<Flags>::builder("Flags", "tests")
            .property("plain", boxed, get, set)
            .constrained("annotated", boxed, Constraints::new().not_null(), get, set)
            .constrained(
                "ruled",
                boxed,
                Constraints::new().validate(ValidateRule::NotEmpty),
                get,
                set,
            )
            .constrained(
                "other_rule",
                boxed,
                Constraints::new().validate(ValidateRule::Other("email".into())),
                get,
                set,
            )
            .build()
            .expect("valid table");
        let registry = ComponentRegistry::with_defaults();
        let form = FormSynthesizer::new(&registry)
            .synthesize(&Rc::new(meta))
            .expect("synthesizes");
        let mandatory: Vec<_> = form.fields().iter().map(|f| f.is_mandatory()).collect();
        assert_eq!(mandatory, [false, true, true, false]);
    }

    #[test]
    fn floats_are_unbounded_and_beans_unresolved() {
        struct Holder {
            ratio: f64,
        }
        let meta = BeanMeta::<Holder>::builder("Holder", "tests")
            .property(
                "ratio",
                DeclaredType::F64,
                |h| Value::Float(h.ratio),
                |h, v| {
                    h.ratio = extract::float("ratio", DeclaredType::F64, v)?;
                    Ok(())
                },
            )
            .property(
                "nested",
                DeclaredType::Bean("Nested"),
                |_| Value::Null,
                |_, _| Ok(()),
            )
            .build()
            .expect("valid table");
        let registry = ComponentRegistry::with_defaults();
        let form = FormSynthesizer::new(&registry)
            .synthesize(&Rc::new(meta))
            .expect("synthesizes");
        let ratio = form.field("ratio").expect("present");
        assert_eq!(ratio.min_value(), Some(Bound::Float(f64::NEG_INFINITY)));
        assert_eq!(ratio.max_value(), Some(Bound::Float(f64::INFINITY)));
        assert_eq!(form.field("nested").and_then(|f| f.component_factory()), None);
    }
}
