use thiserror::Error as ThisError;

/// A widget refused a user or programmatic operation.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum WidgetError {
    #[error("no option `{option}`")]
    UnknownOption { option: String },

    #[error("a mandatory choice cannot be cleared")]
    NotClearable,

    #[error("the choice is limited to its items")]
    NotEditable,

    #[error("index {index} out of bounds for a list of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("the list already holds its maximum of {max} items")]
    ListFull { max: usize },
}
