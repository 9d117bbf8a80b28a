//! Field and form descriptors produced by synthesis.

use crate::ComponentFactory;
use metaform_meta::{BeanMeta, Bound, DeclaredType, PropertyDescriptor};
use std::fmt;
use std::rc::Rc;

/// How one property is bound and validated.
///
/// Built with the `with_*` methods; the component factory is the only part
/// assigned after construction.
pub struct FieldDescriptor<B> {
    property: Rc<PropertyDescriptor<B>>,
    mandatory: bool,
    min_value: Option<Bound>,
    max_value: Option<Bound>,
    min_size: usize,
    max_size: usize,
    selectable_values: Option<Vec<&'static str>>,
    component_factory: Option<ComponentFactory>,
}

impl<B> FieldDescriptor<B> {
    /// An optional, unbounded field for `property`.
    pub fn new(property: Rc<PropertyDescriptor<B>>) -> Self {
        Self {
            property,
            mandatory: false,
            min_value: None,
            max_value: None,
            min_size: 0,
            max_size: usize::MAX,
            selectable_values: None,
            component_factory: None,
        }
    }

    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    pub fn with_bounds(mut self, min: Option<Bound>, max: Option<Bound>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_size(mut self, min: usize, max: usize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Limits the field to `values`, in the order given.
    pub fn with_selectable_values(mut self, values: Vec<&'static str>) -> Self {
        self.selectable_values = Some(values);
        self
    }

    pub fn with_component_factory(mut self, factory: Option<ComponentFactory>) -> Self {
        self.component_factory = factory;
        self
    }

    pub fn set_component_factory(&mut self, factory: Option<ComponentFactory>) {
        self.component_factory = factory;
    }

    pub fn name(&self) -> &'static str {
        self.property.name()
    }

    pub fn property(&self) -> &Rc<PropertyDescriptor<B>> {
        &self.property
    }

    pub fn declared_type(&self) -> DeclaredType {
        self.property.declared_type()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn min_value(&self) -> Option<Bound> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<Bound> {
        self.max_value
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// True exactly when the field has selectable values.
    pub fn is_limited_values(&self) -> bool {
        self.selectable_values.is_some()
    }

    pub fn selectable_values(&self) -> Option<&[&'static str]> {
        self.selectable_values.as_deref()
    }

    pub fn component_factory(&self) -> Option<ComponentFactory> {
        self.component_factory
    }
}

impl<B> Clone for FieldDescriptor<B> {
    fn clone(&self) -> Self {
        Self {
            property: Rc::clone(&self.property),
            mandatory: self.mandatory,
            min_value: self.min_value,
            max_value: self.max_value,
            min_size: self.min_size,
            max_size: self.max_size,
            selectable_values: self.selectable_values.clone(),
            component_factory: self.component_factory,
        }
    }
}

impl<B> fmt::Debug for FieldDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name())
            .field("declared_type", &self.declared_type())
            .field("mandatory", &self.mandatory)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("selectable_values", &self.selectable_values)
            .field("component_factory", &self.component_factory)
            .finish()
    }
}

/// Ordered field descriptors of one bean type.
pub struct FormDescriptor<B> {
    bean: Rc<BeanMeta<B>>,
    fields: Vec<FieldDescriptor<B>>,
}

impl<B> FormDescriptor<B> {
    pub fn new(bean: Rc<BeanMeta<B>>, fields: Vec<FieldDescriptor<B>>) -> Self {
        Self { bean, fields }
    }

    pub fn bean_meta(&self) -> &Rc<BeanMeta<B>> {
        &self.bean
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[FieldDescriptor<B>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<B>> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Replaces the whole field list, e.g. to reorder or drop fields.
    pub fn replace_fields(&mut self, fields: Vec<FieldDescriptor<B>>) {
        self.fields = fields;
    }
}

impl<B> Clone for FormDescriptor<B> {
    fn clone(&self) -> Self {
        Self {
            bean: Rc::clone(&self.bean),
            fields: self.fields.clone(),
        }
    }
}

impl<B> fmt::Debug for FormDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDescriptor")
            .field("bean", &self.bean.name())
            .field("fields", &self.fields)
            .finish()
    }
}
