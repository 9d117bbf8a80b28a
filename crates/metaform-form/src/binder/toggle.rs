use super::{Binding, PropertyBinder};
use metaform_foundation::ErrorStatus;
use metaform_meta::Value;
use metaform_ui::{ToggleGroup, WidgetHandle};

/// Binds a boolean property to a radio group.
///
/// With nothing selected a `bool` reads as `false` and an `Option<bool>` as
/// unset.
pub(crate) struct ToggleBinder<B> {
    binding: Binding<B>,
    group: ToggleGroup,
}

impl<B> ToggleBinder<B> {
    pub(crate) fn new(binding: Binding<B>, group: ToggleGroup) -> Self {
        Self { binding, group }
    }
}

impl<B: 'static> PropertyBinder for ToggleBinder<B> {
    fn property_name(&self) -> &'static str {
        self.binding.name()
    }

    fn widget(&self) -> WidgetHandle {
        WidgetHandle::Toggle(self.group.clone())
    }

    fn update_ui(&self) {
        let nullable = self.binding.declared_type().is_nullable();
        match self.binding.read() {
            Value::Bool(b) => {
                if let Err(err) = self.group.select(Some(b)) {
                    log::warn!("cannot display {}: {err}", self.binding.name());
                }
            }
            Value::Null if nullable => {
                if let Err(err) = self.group.select(None) {
                    log::warn!("cannot display {}: {err}", self.binding.name());
                }
            }
            Value::Null => self.group.clear_selection(),
            other => log::warn!(
                "cannot display {} value of {}",
                other.kind(),
                self.binding.name()
            ),
        }
    }

    fn update_property(&self) -> ErrorStatus {
        let value = match self.group.selection() {
            Some(Some(b)) => Value::Bool(b),
            Some(None) => Value::Null,
            None if self.binding.declared_type().is_nullable() => Value::Null,
            None => Value::Bool(false),
        };
        self.binding.store(value)
    }

    fn error_status(&self) -> ErrorStatus {
        self.binding.status_or(ErrorStatus::Valid)
    }

    /// A radio group always shows a value.
    fn is_displayed_as_mandatory(&self) -> bool {
        true
    }
}
