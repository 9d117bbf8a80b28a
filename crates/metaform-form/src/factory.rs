use crate::binder::{
    Binding, ChoiceBinder, ListBinder, PropertyBinder, TextBinder, ToggleBinder,
};
use crate::messages::{code_text, message, selection_text};
use crate::{FieldDescriptor, FormError, FormSettings};
use metaform_foundation::validation::{
    DateValidator, FloatingValidator, IntegralValidator, TextLengthValidator,
};
use metaform_foundation::{ValidatedTextField, Validator};
use metaform_meta::DeclaredType;
use metaform_ui::{ChoiceBox, ChoiceItem, EditableList, ToggleGroup, ToggleOption};
use std::cell::RefCell;
use std::rc::Rc;

/// Kinds of bound widget a field can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFactory {
    /// Free text with length bounds; also opaque named scalars.
    Text,
    Integral,
    Floating,
    /// Radio group for booleans.
    Toggle,
    /// Choice box over an enumeration.
    Choice,
    /// Choice box over the code list configured for a named type, such as
    /// currencies or time zones.
    Code,
    Date,
    TextList,
}

impl ComponentFactory {
    pub fn supports(self, declared: &DeclaredType) -> bool {
        match self {
            ComponentFactory::Text => {
                matches!(declared, DeclaredType::Text | DeclaredType::Named(_))
            }
            ComponentFactory::Integral => declared.int_width().is_some(),
            ComponentFactory::Floating => declared.float_width().is_some(),
            ComponentFactory::Toggle => declared.is_bool(),
            ComponentFactory::Choice => declared.enum_type().is_some(),
            ComponentFactory::Code => matches!(declared, DeclaredType::Named(_)),
            ComponentFactory::Date => *declared == DeclaredType::Date,
            ComponentFactory::TextList => *declared == DeclaredType::TextList,
        }
    }

    /// Builds the widget for `field` and binds it to `bean`.
    pub fn create<B: 'static>(
        self,
        field: &FieldDescriptor<B>,
        bean: &Rc<RefCell<B>>,
        settings: &FormSettings,
    ) -> Result<Box<dyn PropertyBinder>, FormError> {
        let declared = field.declared_type();
        if !self.supports(&declared) {
            return Err(FormError::UnsupportedType {
                factory: self,
                declared,
            });
        }
        let binding = Binding::new(Rc::clone(field.property()), Rc::clone(bean), field.is_mandatory());
        let mandatory = field.is_mandatory();

        let binder: Box<dyn PropertyBinder> = match self {
            ComponentFactory::Text => {
                let validator =
                    TextLengthValidator::new(mandatory, field.min_size(), field.max_size());
                text_binder(binding, validator, settings)
            }
            ComponentFactory::Integral => {
                let mut validator = IntegralValidator::new(
                    declared.int_width().ok_or(FormError::UnsupportedType {
                        factory: self,
                        declared,
                    })?,
                    mandatory,
                );
                let (min, max) = validator.bounds();
                let min = field.min_value().and_then(|b| b.as_int()).unwrap_or(min);
                let max = field.max_value().and_then(|b| b.as_int()).unwrap_or(max);
                validator = validator.with_bounds(min, max);
                text_binder(binding, validator, settings)
            }
            ComponentFactory::Floating => {
                let width = declared.float_width().ok_or(FormError::UnsupportedType {
                    factory: self,
                    declared,
                })?;
                let min = field.min_value().map_or(f64::NEG_INFINITY, |b| b.as_float());
                let max = field.max_value().map_or(f64::INFINITY, |b| b.as_float());
                let validator = FloatingValidator::new(width, mandatory)
                    .allow_nan(settings.allow_nan)
                    .with_bounds(min, max);
                text_binder(binding, validator, settings)
            }
            ComponentFactory::Date => {
                text_binder(binding, DateValidator::new(mandatory), settings)
            }
            ComponentFactory::Toggle => {
                let messages = settings.messages.as_ref();
                let mut options = vec![
                    ToggleOption::new(Some(true), message(messages, "Boolean.true")),
                    ToggleOption::new(Some(false), message(messages, "Boolean.false")),
                ];
                if declared.is_nullable() {
                    options.push(ToggleOption::new(None, message(messages, "Boolean.null")));
                }
                Box::new(ToggleBinder::new(binding, ToggleGroup::new(options)))
            }
            ComponentFactory::Choice => {
                let enum_type = declared.enum_type().ok_or(FormError::UnsupportedType {
                    factory: self,
                    declared,
                })?;
                let values = field.selectable_values().unwrap_or(enum_type.members);
                let items = values
                    .iter()
                    .map(|&member| {
                        ChoiceItem::new(
                            member,
                            selection_text(settings.messages.as_ref(), &enum_type, member),
                        )
                    })
                    .collect();
                let choice = ChoiceBox::new(items, mandatory, field.is_limited_values());
                Box::new(ChoiceBinder::new(binding, choice))
            }
            ComponentFactory::Code => {
                let DeclaredType::Named(type_name) = declared else {
                    return Err(FormError::UnsupportedType {
                        factory: self,
                        declared,
                    });
                };
                let codes = settings
                    .code_list(type_name)
                    .ok_or(FormError::MissingCodeList {
                        property: field.name(),
                        type_name,
                    })?;
                let mut items: Vec<_> = codes
                    .iter()
                    .map(|&code| {
                        ChoiceItem::new(code, code_text(settings.messages.as_ref(), type_name, code))
                    })
                    .collect();
                items.sort_by(|a, b| a.label.cmp(&b.label));
                let choice = ChoiceBox::new(items, mandatory, true);
                Box::new(ChoiceBinder::new(binding, choice))
            }
            ComponentFactory::TextList => {
                let list = EditableList::new(mandatory, field.min_size(), field.max_size());
                Box::new(ListBinder::new(binding, list))
            }
        };
        log::trace!("created {self:?} binder for {}", field.name());
        Ok(binder)
    }
}

fn text_binder<B: 'static>(
    binding: Binding<B>,
    validator: impl Validator + 'static,
    settings: &FormSettings,
) -> Box<dyn PropertyBinder> {
    let field = ValidatedTextField::new(Rc::new(validator));
    Box::new(TextBinder::new(binding, field, Rc::clone(&settings.converter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_meta::{EnumType, Primitive};

    #[test]
    fn supports_matches_declared_kinds() {
        const KIND: EnumType = EnumType::new("Kind", &["A"]);
        assert!(ComponentFactory::Text.supports(&DeclaredType::Named("Uuid")));
        assert!(ComponentFactory::Integral.supports(&DeclaredType::Boxed(Primitive::I8)));
        assert!(!ComponentFactory::Integral.supports(&DeclaredType::F32));
        assert!(ComponentFactory::Toggle.supports(&DeclaredType::BOOL));
        assert!(ComponentFactory::Choice.supports(&DeclaredType::Enum(KIND)));
        assert!(!ComponentFactory::Choice.supports(&DeclaredType::Text));
        assert!(!ComponentFactory::Text.supports(&DeclaredType::Bean("Address")));
        assert!(ComponentFactory::Code.supports(&DeclaredType::Named("Currency")));
        assert!(!ComponentFactory::Code.supports(&DeclaredType::Text));
    }
}
