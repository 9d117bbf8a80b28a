//! Declared constraints attached to a property.

/// A named validation rule declared on a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateRule {
    NotNull,
    NotEmpty,
    /// Any other rule; carried through but not interpreted by the form layer.
    Other(String),
}

impl ValidateRule {
    /// True for rules that forbid an absent value.
    pub fn requires_value(&self) -> bool {
        matches!(self, ValidateRule::NotNull | ValidateRule::NotEmpty)
    }
}

/// Declared length bounds of a string or list property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConstraint {
    pub min: usize,
    pub max: usize,
}

/// Constraint metadata, as declared alongside a property.
///
/// Every field is optional; an empty set means "unconstrained".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    pub not_null: bool,
    pub validate: Option<ValidateRule>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub size: Option<SizeConstraint>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn validate(mut self, rule: ValidateRule) -> Self {
        self.validate = Some(rule);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn range(self, min: i64, max: i64) -> Self {
        self.min(min).max(max)
    }

    pub fn size(mut self, min: usize, max: usize) -> Self {
        self.size = Some(SizeConstraint { min, max });
        self
    }
}
