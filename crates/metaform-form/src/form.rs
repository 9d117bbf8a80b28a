//! Assembled forms: labelled binders over one bean instance.

use crate::messages::{error_text, field_label, MessageSource};
use crate::{FormDescriptor, FormError, FormSettings, FormSynthesizer, PropertyBinder};
use metaform_foundation::ErrorStatus;
use metaform_meta::Bean;
use metaform_ui::WidgetHandle;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One rendered field of a [`Form`].
pub struct FormField {
    label: String,
    binder: Box<dyn PropertyBinder>,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        self.binder.property_name()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn binder(&self) -> &dyn PropertyBinder {
        self.binder.as_ref()
    }

    pub fn widget(&self) -> WidgetHandle {
        self.binder.widget()
    }

    pub fn error_status(&self) -> ErrorStatus {
        self.binder.error_status()
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name())
            .field("label", &self.label)
            .field("status", &self.error_status())
            .finish()
    }
}

/// Outcome of [`Form::commit`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommitReport {
    failures: Vec<(&'static str, ErrorStatus)>,
}

impl CommitReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fields that were not written, in field order, with their status.
    pub fn failures(&self) -> &[(&'static str, ErrorStatus)] {
        &self.failures
    }

    pub fn failed_fields(&self) -> Vec<&'static str> {
        self.failures.iter().map(|(name, _)| *name).collect()
    }
}

/// Widgets bound to the properties of one bean instance.
///
/// Only fields with a resolved component factory are rendered, in descriptor
/// order.
pub struct Form<B> {
    descriptor: FormDescriptor<B>,
    bean: Rc<RefCell<B>>,
    fields: Vec<FormField>,
    messages: Rc<dyn MessageSource>,
}

impl<B: 'static> Form<B> {
    /// Creates the binders of `descriptor`. The widgets start empty; call
    /// [`update_ui`](Self::update_ui) to show the bean.
    pub fn build(
        settings: &FormSettings,
        descriptor: FormDescriptor<B>,
        bean: Rc<RefCell<B>>,
    ) -> Result<Self, FormError> {
        let mut fields = Vec::with_capacity(descriptor.len());
        for field in descriptor.fields() {
            let Some(factory) = field.component_factory() else {
                continue;
            };
            let binder = factory.create(field, &bean, settings)?;
            let label = field_label(
                settings.messages.as_ref(),
                field.property(),
                binder.is_displayed_as_mandatory(),
            );
            fields.push(FormField { label, binder });
        }
        log::debug!(
            "built form for {} with {} of {} fields",
            descriptor.bean_meta().name(),
            fields.len(),
            descriptor.len()
        );
        Ok(Self {
            descriptor,
            bean,
            fields,
            messages: Rc::clone(&settings.messages),
        })
    }

    pub fn descriptor(&self) -> &FormDescriptor<B> {
        &self.descriptor
    }

    pub fn bean(&self) -> &Rc<RefCell<B>> {
        &self.bean
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Widget of the named field, if it is rendered.
    pub fn component(&self, name: &str) -> Option<WidgetHandle> {
        self.field(name).map(FormField::widget)
    }

    /// Shows the current bean values in every widget.
    pub fn update_ui(&self) {
        for field in &self.fields {
            field.binder.update_ui();
        }
    }

    /// Writes every field back to the bean. A failing field does not stop the
    /// others from being written.
    pub fn commit(&self) -> CommitReport {
        let failures: Vec<_> = self
            .fields
            .iter()
            .filter_map(|field| {
                let status = field.binder.update_property();
                status.is_error().then(|| (field.name(), status))
            })
            .collect();
        if failures.is_empty() {
            log::debug!("committed {}", self.descriptor.bean_meta().name());
        } else {
            log::debug!(
                "commit of {} left {} fields unwritten",
                self.descriptor.bean_meta().name(),
                failures.len()
            );
        }
        CommitReport { failures }
    }

    /// True when every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.error_status().is_valid())
    }

    /// Message for the named field's current status; empty when valid.
    pub fn error_text(&self, name: &str) -> Option<String> {
        self.field(name)
            .map(|field| error_text(self.messages.as_ref(), &field.error_status()))
    }
}

impl<B> fmt::Debug for Form<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("bean", &self.descriptor.bean_meta().name())
            .field("fields", &self.fields)
            .finish()
    }
}

/// Synthesizes, builds and fills a form for `bean`.
pub fn create_form<B: Bean>(settings: &FormSettings, bean: Rc<RefCell<B>>) -> Result<Form<B>, FormError> {
    let meta = B::bean_meta()?;
    let descriptor = FormSynthesizer::new(&settings.registry).synthesize(&meta)?;
    let form = Form::build(settings, descriptor, bean)?;
    form.update_ui();
    Ok(form)
}
