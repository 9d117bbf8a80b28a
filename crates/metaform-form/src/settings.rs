use crate::codes::{CURRENCY_CODES, TIME_ZONE_IDS};
use crate::messages::{DefaultMessages, MessageSource};
use crate::ComponentRegistry;
use indexmap::IndexMap;
use metaform_meta::{DefaultStringConvert, StringConvert};
use std::fmt;
use std::rc::Rc;

/// Collaborators shared by every form built from these settings.
#[derive(Clone)]
pub struct FormSettings {
    pub registry: ComponentRegistry,
    pub converter: Rc<dyn StringConvert>,
    pub messages: Rc<dyn MessageSource>,
    /// Whether floating fields accept `NaN`.
    pub allow_nan: bool,
    /// Permitted codes of named types rendered as choices, keyed by type name.
    pub code_lists: IndexMap<&'static str, &'static [&'static str]>,
}

impl FormSettings {
    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_converter(mut self, converter: impl StringConvert + 'static) -> Self {
        self.converter = Rc::new(converter);
        self
    }

    pub fn with_messages(mut self, messages: impl MessageSource + 'static) -> Self {
        self.messages = Rc::new(messages);
        self
    }

    pub fn with_allow_nan(mut self, allow_nan: bool) -> Self {
        self.allow_nan = allow_nan;
        self
    }

    /// Sets the codes offered for the named type `type_name`.
    pub fn with_code_list(mut self, type_name: &'static str, codes: &'static [&'static str]) -> Self {
        self.code_lists.insert(type_name, codes);
        self
    }

    pub fn code_list(&self, type_name: &str) -> Option<&'static [&'static str]> {
        self.code_lists.get(type_name).copied()
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            registry: ComponentRegistry::with_defaults(),
            converter: Rc::new(DefaultStringConvert),
            messages: Rc::new(DefaultMessages::new()),
            allow_nan: false,
            code_lists: IndexMap::from([
                ("Currency", CURRENCY_CODES),
                ("TimeZone", TIME_ZONE_IDS),
            ]),
        }
    }
}

impl fmt::Debug for FormSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSettings")
            .field("registry", &self.registry)
            .field("allow_nan", &self.allow_nan)
            .field("code_lists", &self.code_lists.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
