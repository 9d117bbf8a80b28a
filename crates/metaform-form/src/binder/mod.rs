//! Two-way synchronization between bean properties and widgets.
//!
//! A binder pairs one widget with one property of one bean instance. It is
//! created by a [`ComponentFactory`](crate::ComponentFactory) when a form is
//! built and lives as long as the form.

mod choice;
mod list;
mod text;
mod toggle;

pub(crate) use choice::ChoiceBinder;
pub(crate) use list::ListBinder;
pub(crate) use text::TextBinder;
pub(crate) use toggle::ToggleBinder;

use metaform_foundation::{ErrorStatus, InvalidKind};
use metaform_meta::{DeclaredType, Primitive, PropertyDescriptor, Value};
use metaform_ui::WidgetHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A widget bound to a bean property.
pub trait PropertyBinder {
    fn property_name(&self) -> &'static str;

    /// Shared handle to the bound widget.
    fn widget(&self) -> WidgetHandle;

    /// Copies the property value into the widget without validating it.
    fn update_ui(&self);

    /// Copies the widget value into the property.
    ///
    /// Runs the widget's exit checks first. Nothing is written unless the
    /// returned status is [`ErrorStatus::Valid`].
    fn update_property(&self) -> ErrorStatus;

    fn error_status(&self) -> ErrorStatus;

    /// Whether the label should carry the mandatory marker.
    fn is_displayed_as_mandatory(&self) -> bool;
}

/// Property access shared by every binder.
pub(crate) struct Binding<B> {
    property: Rc<PropertyDescriptor<B>>,
    bean: Rc<RefCell<B>>,
    mandatory: bool,
    write_failed: Cell<bool>,
}

impl<B> Binding<B> {
    pub(crate) fn new(property: Rc<PropertyDescriptor<B>>, bean: Rc<RefCell<B>>, mandatory: bool) -> Self {
        Self {
            property,
            bean,
            mandatory,
            write_failed: Cell::new(false),
        }
    }

    fn name(&self) -> &'static str {
        self.property.name()
    }

    fn declared_type(&self) -> DeclaredType {
        self.property.declared_type()
    }

    fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    fn read(&self) -> Value {
        self.write_failed.set(false);
        self.property.get(&self.bean.borrow())
    }

    /// Writes `value`, mapping a refused value to a conversion error.
    fn store(&self, value: Value) -> ErrorStatus {
        let result = self.property.set(&mut self.bean.borrow_mut(), value);
        match result {
            Ok(()) => {
                self.write_failed.set(false);
                log::debug!("committed {}", self.name());
                ErrorStatus::Valid
            }
            Err(err) => {
                log::warn!("{} refused the widget value: {err}", self.name());
                self.write_failed.set(true);
                ErrorStatus::Invalid(InvalidKind::Conversion)
            }
        }
    }

    /// Status of the last write, falling back to the widget's own status.
    fn status_or(&self, widget_status: ErrorStatus) -> ErrorStatus {
        if self.write_failed.get() {
            ErrorStatus::Invalid(InvalidKind::Conversion)
        } else {
            widget_status
        }
    }

    /// What a blank widget writes; `None` when the field needs a value.
    fn blank_value(&self) -> Option<Value> {
        if self.mandatory {
            None
        } else if self.declared_type().is_nullable() {
            Some(Value::Null)
        } else {
            Some(type_default(&self.declared_type()))
        }
    }
}

/// Zero value of a non-nullable type.
pub(crate) fn type_default(declared: &DeclaredType) -> Value {
    match declared {
        DeclaredType::Primitive(Primitive::Bool) => Value::Bool(false),
        DeclaredType::Primitive(Primitive::F32 | Primitive::F64) => Value::Float(0.0),
        DeclaredType::Primitive(_) => Value::Int(0),
        DeclaredType::Text | DeclaredType::Named(_) => Value::Text(String::new()),
        DeclaredType::TextList => Value::List(Vec::new()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_type() {
        assert_eq!(type_default(&DeclaredType::BOOL), Value::Bool(false));
        assert_eq!(type_default(&DeclaredType::I8), Value::Int(0));
        assert_eq!(type_default(&DeclaredType::F32), Value::Float(0.0));
        assert_eq!(type_default(&DeclaredType::Date), Value::Null);
    }
}
