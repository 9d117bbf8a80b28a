//! Metadata-driven forms.
//!
//! A form is derived in three steps:
//!
//! 1. [`FormSynthesizer`] reads a bean's [`BeanMeta`](metaform_meta::BeanMeta)
//!    and describes each property as a [`FieldDescriptor`]: mandatory flag,
//!    bounds, size limits, selectable values and the resolved
//!    [`ComponentFactory`].
//! 2. [`Form::build`] asks each factory for a [`PropertyBinder`] pairing a
//!    widget with the property on one bean instance.
//! 3. [`Form::update_ui`] and [`Form::commit`] copy values between the bean
//!    and the widgets.
//!
//! [`create_form`] runs all three with the collaborators held by
//! [`FormSettings`].
//!
//! ```ignore
//! let person = Rc::new(RefCell::new(Person::default()));
//! let form = create_form(&FormSettings::default(), person.clone())?;
//! // ... user edits ...
//! let report = form.commit();
//! ```

mod binder;
pub mod codes;
mod descriptor;
mod error;
mod factory;
mod form;
pub mod messages;
mod registry;
mod settings;
mod synth;

pub use binder::PropertyBinder;
pub use descriptor::{FieldDescriptor, FormDescriptor};
pub use error::FormError;
pub use factory::ComponentFactory;
pub use form::{create_form, CommitReport, Form, FormField};
pub use messages::{DefaultMessages, MessageSource};
pub use registry::ComponentRegistry;
pub use settings::FormSettings;
pub use synth::FormSynthesizer;
