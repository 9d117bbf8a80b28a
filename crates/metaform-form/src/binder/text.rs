use super::{Binding, PropertyBinder};
use metaform_foundation::{ErrorStatus, InvalidKind, ValidatedTextField};
use metaform_meta::StringConvert;
use metaform_ui::WidgetHandle;
use std::rc::Rc;

/// Binds a property to a validated text field through the string converter.
pub(crate) struct TextBinder<B> {
    binding: Binding<B>,
    field: ValidatedTextField,
    converter: Rc<dyn StringConvert>,
}

impl<B> TextBinder<B> {
    pub(crate) fn new(binding: Binding<B>, field: ValidatedTextField, converter: Rc<dyn StringConvert>) -> Self {
        Self {
            binding,
            field,
            converter,
        }
    }

    fn fail(&self) -> ErrorStatus {
        let status = ErrorStatus::Invalid(InvalidKind::Conversion);
        self.field.set_status(status.clone());
        status
    }
}

impl<B: 'static> PropertyBinder for TextBinder<B> {
    fn property_name(&self) -> &'static str {
        self.binding.name()
    }

    fn widget(&self) -> WidgetHandle {
        WidgetHandle::Text(self.field.clone())
    }

    fn update_ui(&self) {
        let value = self.binding.read();
        let text = match self
            .converter
            .value_to_string(&value, &self.binding.declared_type())
        {
            Ok(text) => text,
            Err(err) => {
                log::warn!("cannot display {}: {err}", self.binding.name());
                String::new()
            }
        };
        self.field.set_text(text);
    }

    fn update_property(&self) -> ErrorStatus {
        let status = self.field.focus_lost();
        if status.is_error() {
            return status;
        }
        let text = self.field.text();
        let value = if text.is_empty() {
            match self.binding.blank_value() {
                Some(value) => value,
                None => {
                    self.field.set_status(ErrorStatus::Mandatory);
                    return ErrorStatus::Mandatory;
                }
            }
        } else {
            match self
                .converter
                .string_to_value(&text, &self.binding.declared_type())
            {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("{}: {err}", self.binding.name());
                    return self.fail();
                }
            }
        };
        let status = self.binding.store(value);
        if status.is_error() {
            self.field.set_status(status.clone());
        }
        status
    }

    fn error_status(&self) -> ErrorStatus {
        self.field.error_status()
    }

    fn is_displayed_as_mandatory(&self) -> bool {
        self.binding.is_mandatory()
    }
}
