use super::{Binding, PropertyBinder};
use metaform_foundation::ErrorStatus;
use metaform_meta::{DeclaredType, Value};
use metaform_ui::{ChoiceBox, WidgetHandle};

/// Binds an enumeration or coded property to a choice box.
///
/// Enumerations travel as [`Value::Enum`], named types with a code list as
/// [`Value::Text`].
pub(crate) struct ChoiceBinder<B> {
    binding: Binding<B>,
    choice: ChoiceBox,
}

impl<B> ChoiceBinder<B> {
    pub(crate) fn new(binding: Binding<B>, choice: ChoiceBox) -> Self {
        Self { binding, choice }
    }
}

impl<B: 'static> PropertyBinder for ChoiceBinder<B> {
    fn property_name(&self) -> &'static str {
        self.binding.name()
    }

    fn widget(&self) -> WidgetHandle {
        WidgetHandle::Choice(self.choice.clone())
    }

    fn update_ui(&self) {
        let value = self.binding.read();
        let selection = match &value {
            Value::Enum(member) => Some(*member),
            Value::Text(code) if code.is_empty() => None,
            Value::Text(code) => Some(code.as_str()),
            Value::Null => None,
            other => {
                log::warn!(
                    "cannot display {} value of {}",
                    other.kind(),
                    self.binding.name()
                );
                None
            }
        };
        if let Err(err) = self.choice.set_selection(selection) {
            log::warn!("cannot display {}: {err}", self.binding.name());
        }
    }

    fn update_property(&self) -> ErrorStatus {
        let status = self.choice.focus_lost();
        if status.is_error() {
            return status;
        }
        let coded = matches!(self.binding.declared_type(), DeclaredType::Named(_));
        let value = match self.choice.selection() {
            None => Value::Null,
            Some(code) if coded => Value::Text(code.to_string()),
            Some(member) => Value::Enum(member),
        };
        self.binding.store(value)
    }

    fn error_status(&self) -> ErrorStatus {
        self.binding.status_or(self.choice.error_status())
    }

    fn is_displayed_as_mandatory(&self) -> bool {
        self.binding.is_mandatory()
    }
}
