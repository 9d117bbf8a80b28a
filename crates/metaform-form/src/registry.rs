use crate::{ComponentFactory, FormError};
use indexmap::IndexMap;
use metaform_meta::{DeclaredType, Primitive};

/// Maps declared types to the factory that renders them.
///
/// Lookups match the declared type exactly; `i32` and `Option<i32>` are
/// separate keys. Populate it at startup and hand it to the form layer
/// through [`FormSettings`](crate::FormSettings).
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    factories: IndexMap<DeclaredType, ComponentFactory>,
}

impl ComponentRegistry {
    /// An empty registry. Enumerations still resolve through the choice
    /// fallback of the synthesizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for scalars, text, dates, string lists and the
    /// `Currency` and `TimeZone` code choices.
    pub fn with_defaults() -> Self {
        let mut factories = IndexMap::new();
        for primitive in [
            Primitive::Bool,
            Primitive::I8,
            Primitive::I16,
            Primitive::I32,
            Primitive::I64,
            Primitive::F32,
            Primitive::F64,
        ] {
            let factory = if primitive == Primitive::Bool {
                ComponentFactory::Toggle
            } else if primitive.int_width().is_some() {
                ComponentFactory::Integral
            } else {
                ComponentFactory::Floating
            };
            factories.insert(DeclaredType::Primitive(primitive), factory);
            factories.insert(DeclaredType::Boxed(primitive), factory);
        }
        factories.insert(DeclaredType::Text, ComponentFactory::Text);
        factories.insert(DeclaredType::Named("Uuid"), ComponentFactory::Text);
        factories.insert(DeclaredType::Named("Url"), ComponentFactory::Text);
        factories.insert(DeclaredType::Named("Currency"), ComponentFactory::Code);
        factories.insert(DeclaredType::Named("TimeZone"), ComponentFactory::Code);
        factories.insert(DeclaredType::Date, ComponentFactory::Date);
        factories.insert(DeclaredType::TextList, ComponentFactory::TextList);
        Self { factories }
    }

    /// Registers `factory` for `declared`, returning the factory it replaces.
    pub fn register(
        &mut self,
        declared: DeclaredType,
        factory: ComponentFactory,
    ) -> Result<Option<ComponentFactory>, FormError> {
        if !factory.supports(&declared) {
            return Err(FormError::UnsupportedType { factory, declared });
        }
        log::debug!("registered {factory:?} for {declared}");
        Ok(self.factories.insert(declared, factory))
    }

    pub fn unregister(&mut self, declared: &DeclaredType) -> Option<ComponentFactory> {
        self.factories.shift_remove(declared)
    }

    pub fn resolve(&self, declared: &DeclaredType) -> Option<ComponentFactory> {
        self.factories.get(declared).copied()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registrations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&DeclaredType, &ComponentFactory)> {
        self.factories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_meta::EnumType;

    const SHADE: EnumType = EnumType::new("Shade", &["LIGHT", "DARK"]);

    #[test]
    fn defaults_cover_scalars_and_text() {
        let registry = ComponentRegistry::with_defaults();
        assert_eq!(
            registry.resolve(&DeclaredType::I16),
            Some(ComponentFactory::Integral)
        );
        assert_eq!(
            registry.resolve(&DeclaredType::Boxed(Primitive::F32)),
            Some(ComponentFactory::Floating)
        );
        assert_eq!(
            registry.resolve(&DeclaredType::Boxed(Primitive::Bool)),
            Some(ComponentFactory::Toggle)
        );
        assert_eq!(
            registry.resolve(&DeclaredType::Named("Uuid")),
            Some(ComponentFactory::Text)
        );
        assert_eq!(
            registry.resolve(&DeclaredType::Named("Currency")),
            Some(ComponentFactory::Code)
        );
        assert_eq!(
            registry.resolve(&DeclaredType::Named("TimeZone")),
            Some(ComponentFactory::Code)
        );
        assert_eq!(registry.resolve(&DeclaredType::Enum(SHADE)), None);
        assert_eq!(registry.resolve(&DeclaredType::Bean("Address")), None);
    }

    #[test]
    fn resolution_is_exact() {
        let mut registry = ComponentRegistry::new();
        registry
            .register(DeclaredType::I32, ComponentFactory::Integral)
            .expect("integral handles i32");
        assert_eq!(registry.resolve(&DeclaredType::Boxed(Primitive::I32)), None);
        assert_eq!(registry.resolve(&DeclaredType::I64), None);
    }

    #[test]
    fn register_rejects_mismatched_factory() {
        let mut registry = ComponentRegistry::new();
        assert_eq!(
            registry.register(DeclaredType::Text, ComponentFactory::Integral),
            Err(FormError::UnsupportedType {
                factory: ComponentFactory::Integral,
                declared: DeclaredType::Text,
            })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn register_replaces_and_unregister_removes() {
        let mut registry = ComponentRegistry::with_defaults();
        let previous = registry
            .register(DeclaredType::Named("Uuid"), ComponentFactory::Text)
            .expect("text handles named types");
        assert_eq!(previous, Some(ComponentFactory::Text));
        assert_eq!(
            registry.unregister(&DeclaredType::Date),
            Some(ComponentFactory::Date)
        );
        assert_eq!(registry.resolve(&DeclaredType::Date), None);
    }
}
