//! Localized text for labels, choices and error messages.
//!
//! Lookups go through a [`MessageSource`]. A key that no source knows renders
//! as `!key!` so a missing translation stays visible instead of blank.

use indexmap::IndexMap;
use metaform_foundation::ErrorStatus;
use metaform_meta::{EnumType, PropertyDescriptor};

/// Resolves message keys to display text.
pub trait MessageSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Built-in English messages, extendable with application entries.
#[derive(Debug, Clone)]
pub struct DefaultMessages {
    table: IndexMap<String, String>,
}

const ENGLISH: &[(&str, &str)] = &[
    ("Error.mandatory", "A value is required"),
    ("Error.range", "Value must be within {0}"),
    ("Error.Byte.invalid", "Not a valid byte"),
    ("Error.Short.invalid", "Not a valid short integer"),
    ("Error.Integer.invalid", "Not a valid integer"),
    ("Error.Long.invalid", "Not a valid long integer"),
    ("Error.Float.invalid", "Not a valid number"),
    ("Error.Double.invalid", "Not a valid number"),
    ("Error.NaN", "NaN is not allowed"),
    ("Error.Date.invalid", "Dates are written YYYY-MM-DD"),
    ("Error.invalid", "Invalid value"),
    ("Boolean.true", "Yes"),
    ("Boolean.false", "No"),
    ("Boolean.null", "Not set"),
];

impl DefaultMessages {
    pub fn new() -> Self {
        Self {
            table: ENGLISH
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// A source with no entries at all.
    pub fn empty() -> Self {
        Self {
            table: IndexMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.table.insert(key.into(), text.into());
    }
}

impl Default for DefaultMessages {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSource for DefaultMessages {
    fn lookup(&self, key: &str) -> Option<String> {
        self.table.get(key).cloned()
    }
}

/// Text for `key`, or `!key!` when missing.
pub fn message(messages: &dyn MessageSource, key: &str) -> String {
    messages
        .lookup(key)
        .unwrap_or_else(|| format!("!{key}!"))
}

/// Message shown next to a field; empty for a valid status.
///
/// A `{0}` placeholder receives the status detail (the range of a range error).
pub fn error_text(messages: &dyn MessageSource, status: &ErrorStatus) -> String {
    if status.is_valid() {
        return String::new();
    }
    let text = message(messages, status.message_key());
    match status.detail() {
        Some(detail) => text.replace("{0}", detail),
        None => text,
    }
}

/// Label of a field: `Type.prop.label` from the source, qualified name first,
/// else the humanized property name. Ends in `:` and gains `*` when mandatory.
pub fn field_label<B>(
    messages: &dyn MessageSource,
    property: &PropertyDescriptor<B>,
    mandatory: bool,
) -> String {
    let ui_name = property.ui_name();
    let mut label = messages
        .lookup(&format!("{}.label", ui_name.full_name))
        .or_else(|| messages.lookup(&format!("{}.label", ui_name.name)))
        .unwrap_or_else(|| humanize(property.name()));
    if !label.ends_with(':') {
        label.push(':');
    }
    if mandatory {
        label.push('*');
    }
    label
}

/// Display text of an enumeration member: `Enum.MEMBER` from the source, else
/// short members upper-cased and longer ones title-cased with `_` as a space.
pub fn selection_text(messages: &dyn MessageSource, enum_type: &EnumType, member: &str) -> String {
    if let Some(text) = messages.lookup(&format!("{}.{member}", enum_type.name)) {
        return text;
    }
    if member.chars().count() <= 3 {
        return member.to_uppercase();
    }
    member
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Display text of a code from a closed list: `Type.CODE` from the source,
/// else short codes upper-cased and longer ones shown as written.
pub fn code_text(messages: &dyn MessageSource, type_name: &str, code: &str) -> String {
    if let Some(text) = messages.lookup(&format!("{type_name}.{code}")) {
        return text;
    }
    if code.chars().count() <= 3 {
        code.to_uppercase()
    } else {
        code.to_string()
    }
}

/// `trip_count` and `tripCount` both become `Trip count`.
pub fn humanize(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;
    for ch in name.trim().chars() {
        if ch == '_' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
            continue;
        }
        let boundary = match previous {
            Some(prev) => {
                (ch.is_uppercase() && !prev.is_uppercase())
                    || (ch.is_ascii_digit() && prev.is_alphabetic())
                    || (ch.is_alphabetic() && prev.is_ascii_digit())
            }
            None => false,
        };
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        previous = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    let sentence = words.join(" ").to_lowercase();
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_foundation::InvalidKind;
    use metaform_meta::{BeanMeta, DeclaredType, IntWidth, Value};

    struct Trip {
        count: i32,
    }

    fn trip_meta() -> BeanMeta<Trip> {
        BeanMeta::<Trip>::builder("Trip", "travel")
            .property(
                "trip_count",
                DeclaredType::I32,
                |t| Value::Int(t.count.into()),
                |t, v| {
                    t.count = metaform_meta::extract::int("trip_count", DeclaredType::I32, v)?;
                    Ok(())
                },
            )
            .build()
            .expect("valid table")
    }

    #[test]
    fn missing_keys_are_marked() {
        assert_eq!(message(&DefaultMessages::empty(), "Nope"), "!Nope!");
        assert_eq!(
            error_text(&DefaultMessages::empty(), &ErrorStatus::Mandatory),
            "!Error.mandatory!"
        );
    }

    #[test]
    fn error_text_fills_range() {
        let messages = DefaultMessages::new();
        assert_eq!(
            error_text(&messages, &ErrorStatus::range(0, 100)),
            "Value must be within 0 - 100"
        );
        assert_eq!(
            error_text(&messages, &ErrorStatus::Invalid(InvalidKind::Integral(IntWidth::I32))),
            "Not a valid integer"
        );
        assert_eq!(error_text(&messages, &ErrorStatus::Valid), "");
    }

    #[test]
    fn labels_prefer_resources() {
        let meta = trip_meta();
        let property = meta.property("trip_count").expect("declared");
        let messages = DefaultMessages::new();
        assert_eq!(field_label(&messages, property, false), "Trip count:");
        assert_eq!(field_label(&messages, property, true), "Trip count:*");

        let messages = DefaultMessages::new().with("Trip.trip_count.label", "Journeys");
        assert_eq!(field_label(&messages, property, false), "Journeys:");
        let messages = messages.with("travel::Trip.trip_count.label", "Trips taken:");
        assert_eq!(field_label(&messages, property, false), "Trips taken:");
    }

    #[test]
    fn selection_text_fallbacks() {
        const SIZE: EnumType = EnumType::new("Size", &["xl", "EXTRA_LARGE"]);
        let messages = DefaultMessages::new();
        assert_eq!(selection_text(&messages, &SIZE, "xl"), "XL");
        assert_eq!(selection_text(&messages, &SIZE, "EXTRA_LARGE"), "Extra Large");
        let messages = messages.with("Size.xl", "Huge");
        assert_eq!(selection_text(&messages, &SIZE, "xl"), "Huge");
    }

    #[test]
    fn code_text_keeps_long_codes_verbatim() {
        let messages = DefaultMessages::new().with("Currency.EUR", "Euro");
        assert_eq!(code_text(&messages, "Currency", "EUR"), "Euro");
        assert_eq!(code_text(&messages, "Currency", "usd"), "USD");
        assert_eq!(code_text(&messages, "TimeZone", "America/New_York"), "America/New_York");
    }

    #[test]
    fn humanize_splits_words() {
        assert_eq!(humanize("forename"), "Forename");
        assert_eq!(humanize("trip_count"), "Trip count");
        assert_eq!(humanize("successRatio"), "Success ratio");
        assert_eq!(humanize("address2"), "Address 2");
        assert_eq!(humanize(""), "");
    }
}
