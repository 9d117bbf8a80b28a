//! Property tables for bean types.
//!
//! A [`BeanMeta`] is built once per bean type through [`BeanMetaBuilder`] and
//! then shared read-only. Property order is declaration order; the form layer
//! uses it as the visual field order.

use crate::{Constraints, DeclaredType, Getter, MetaError, PropertyDescriptor, Setter};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;
use std::thread::LocalKey;

/// Ordered property table of bean type `B`.
pub struct BeanMeta<B> {
    name: &'static str,
    module_path: &'static str,
    properties: IndexMap<&'static str, Rc<PropertyDescriptor<B>>>,
}

impl<B> BeanMeta<B> {
    pub fn builder(name: &'static str, module_path: &'static str) -> BeanMetaBuilder<B> {
        BeanMetaBuilder {
            name,
            module_path,
            properties: Vec::new(),
        }
    }

    /// Simple type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn full_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.to_string()
        } else {
            format!("{}::{}", self.module_path, self.name)
        }
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Rc<PropertyDescriptor<B>>> {
        self.properties.values()
    }

    pub fn property(&self, name: &str) -> Option<&Rc<PropertyDescriptor<B>>> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<B> std::fmt::Debug for BeanMeta<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanMeta")
            .field("name", &self.name)
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

struct PendingProperty<B> {
    name: &'static str,
    declared_type: DeclaredType,
    constraints: Constraints,
    getter: Getter<B>,
    setter: Setter<B>,
}

/// Collects property declarations and validates them on [`build`](Self::build).
pub struct BeanMetaBuilder<B> {
    name: &'static str,
    module_path: &'static str,
    properties: Vec<PendingProperty<B>>,
}

impl<B> BeanMetaBuilder<B> {
    /// Declares an unconstrained property.
    pub fn property(
        self,
        name: &'static str,
        declared_type: DeclaredType,
        getter: Getter<B>,
        setter: Setter<B>,
    ) -> Self {
        self.constrained(name, declared_type, Constraints::default(), getter, setter)
    }

    /// Declares a property with constraint metadata.
    pub fn constrained(
        mut self,
        name: &'static str,
        declared_type: DeclaredType,
        constraints: Constraints,
        getter: Getter<B>,
        setter: Setter<B>,
    ) -> Self {
        self.properties.push(PendingProperty {
            name,
            declared_type,
            constraints,
            getter,
            setter,
        });
        self
    }

    pub fn build(self) -> Result<BeanMeta<B>, MetaError> {
        let mut properties = IndexMap::with_capacity(self.properties.len());
        for pending in self.properties {
            if pending.name.is_empty() {
                return Err(MetaError::EmptyPropertyName { bean: self.name });
            }
            if properties.contains_key(pending.name) {
                return Err(MetaError::DuplicateProperty {
                    bean: self.name,
                    property: pending.name,
                });
            }
            if pending.constraints.size.is_some()
                && !matches!(
                    pending.declared_type,
                    DeclaredType::Text | DeclaredType::TextList
                )
            {
                return Err(MetaError::MisplacedSize {
                    bean: self.name,
                    property: pending.name,
                    declared: pending.declared_type,
                });
            }
            let descriptor = PropertyDescriptor::new(
                self.name,
                self.module_path,
                pending.name,
                pending.declared_type,
                pending.constraints,
                pending.getter,
                pending.setter,
            );
            properties.insert(pending.name, Rc::new(descriptor));
        }
        log::debug!(
            "built property table for {} ({} properties)",
            self.name,
            properties.len()
        );
        Ok(BeanMeta {
            name: self.name,
            module_path: self.module_path,
            properties,
        })
    }
}

/// A type with a property table.
pub trait Bean: Sized + 'static {
    fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError>;
}

/// Slot for a per-thread cached property table.
pub type MetaSlot<B> = RefCell<Option<Rc<BeanMeta<B>>>>;

/// Returns the table cached in `slot`, building it on first use.
///
/// ```ignore
/// thread_local! {
///     static META: MetaSlot<Person> = const { RefCell::new(None) };
/// }
///
/// impl Bean for Person {
///     fn bean_meta() -> Result<Rc<BeanMeta<Self>>, MetaError> {
///         cached_meta(&META, build_person_meta)
///     }
/// }
/// ```
pub fn cached_meta<B: 'static>(
    slot: &'static LocalKey<MetaSlot<B>>,
    build: impl FnOnce() -> Result<BeanMeta<B>, MetaError>,
) -> Result<Rc<BeanMeta<B>>, MetaError> {
    if let Some(meta) = slot.with(|cell| cell.borrow().clone()) {
        return Ok(meta);
    }
    let meta = Rc::new(build()?);
    slot.with(|cell| *cell.borrow_mut() = Some(meta.clone()));
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extract, Value};

    #[derive(Default)]
    struct Point {
        x: i32,
        label: String,
    }

    fn point_meta() -> BeanMetaBuilder<Point> {
        BeanMeta::<Point>::builder("Point", "geometry").property(
            "x",
            DeclaredType::I32,
            |p| Value::Int(p.x.into()),
            |p, v| {
                p.x = extract::int("x", DeclaredType::I32, v)?;
                Ok(())
            },
        )
    }

    #[test]
    fn preserves_declaration_order() {
        let meta = point_meta()
            .property(
                "label",
                DeclaredType::Text,
                |p| Value::Text(p.label.clone()),
                |p, v| {
                    p.label = extract::text("label", v)?;
                    Ok(())
                },
            )
            .build()
            .expect("valid table");
        let names: Vec<_> = meta.properties().map(|p| p.name()).collect();
        assert_eq!(names, ["x", "label"]);
        assert_eq!(meta.full_name(), "geometry::Point");
    }

    #[test]
    fn rejects_duplicates() {
        let result = point_meta()
            .property("x", DeclaredType::I32, |_| Value::Null, |_, _| Ok(()))
            .build();
        assert_eq!(
            result.unwrap_err(),
            MetaError::DuplicateProperty {
                bean: "Point",
                property: "x"
            }
        );
    }

    #[test]
    fn rejects_empty_names() {
        let result = BeanMeta::<Point>::builder("Point", "")
            .property("", DeclaredType::Text, |_| Value::Null, |_, _| Ok(()))
            .build();
        assert!(matches!(result, Err(MetaError::EmptyPropertyName { .. })));
    }

    #[test]
    fn rejects_size_on_numbers() {
        let result = BeanMeta::<Point>::builder("Point", "")
            .constrained(
                "x",
                DeclaredType::I32,
                Constraints::new().size(1, 2),
                |_| Value::Null,
                |_, _| Ok(()),
            )
            .build();
        assert!(matches!(result, Err(MetaError::MisplacedSize { .. })));
    }

    #[test]
    fn accessors_round_trip() {
        let meta = point_meta().build().expect("valid table");
        let x = meta.property("x").expect("x exists");
        let mut point = Point::default();
        x.set(&mut point, Value::Int(42)).expect("int accepted");
        assert_eq!(x.get(&point), Value::Int(42));
        assert!(x.set(&mut point, Value::Text("no".into())).is_err());
        assert!(x.set(&mut point, Value::Int(i64::MAX)).is_err());
        assert_eq!(x.ui_name().name, "Point.x");
        assert_eq!(x.ui_name().full_name, "geometry::Point.x");
    }

    thread_local! {
        static POINT_META: MetaSlot<Point> = const { RefCell::new(None) };
    }

    #[test]
    fn cached_meta_builds_once() {
        let first = cached_meta(&POINT_META, || point_meta().build()).expect("builds");
        let second = cached_meta(&POINT_META, || panic!("already cached")).expect("cached");
        assert!(Rc::ptr_eq(&first, &second));
    }
}
