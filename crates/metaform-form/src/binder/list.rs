use super::{Binding, PropertyBinder};
use metaform_foundation::ErrorStatus;
use metaform_meta::Value;
use metaform_ui::{EditableList, WidgetHandle};

/// Binds a list-of-strings property to an editable list.
pub(crate) struct ListBinder<B> {
    binding: Binding<B>,
    list: EditableList,
}

impl<B> ListBinder<B> {
    pub(crate) fn new(binding: Binding<B>, list: EditableList) -> Self {
        Self { binding, list }
    }
}

impl<B: 'static> PropertyBinder for ListBinder<B> {
    fn property_name(&self) -> &'static str {
        self.binding.name()
    }

    fn widget(&self) -> WidgetHandle {
        WidgetHandle::List(self.list.clone())
    }

    fn update_ui(&self) {
        match self.binding.read() {
            Value::List(items) => self.list.set_items(items),
            Value::Null => self.list.set_items(Vec::new()),
            other => log::warn!(
                "cannot display {} value of {}",
                other.kind(),
                self.binding.name()
            ),
        }
    }

    fn update_property(&self) -> ErrorStatus {
        let status = self.list.focus_lost();
        if status.is_error() {
            return status;
        }
        self.binding.store(Value::List(self.list.items()))
    }

    fn error_status(&self) -> ErrorStatus {
        self.binding.status_or(self.list.error_status())
    }

    fn is_displayed_as_mandatory(&self) -> bool {
        self.binding.is_mandatory()
    }
}
