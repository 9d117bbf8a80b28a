use super::WidgetError;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// One radio button of a [`ToggleGroup`]. `None` is the explicit "not set"
/// choice of a nullable boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOption {
    pub value: Option<bool>,
    pub label: String,
}

impl ToggleOption {
    pub fn new(value: Option<bool>, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[derive(Debug)]
struct ToggleInner {
    options: SmallVec<[ToggleOption; 3]>,
    selected: Option<usize>,
}

/// Radio group over boolean values.
///
/// The group starts with nothing selected. Selection is by value, so an option
/// list without a `None` entry cannot represent "not set" except by having no
/// selection at all.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    inner: Rc<RefCell<ToggleInner>>,
}

impl ToggleGroup {
    pub fn new(options: impl IntoIterator<Item = ToggleOption>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ToggleInner {
                options: options.into_iter().collect(),
                selected: None,
            })),
        }
    }

    pub fn options(&self) -> Vec<ToggleOption> {
        self.inner.borrow().options.to_vec()
    }

    /// Selects the option carrying `value`.
    pub fn select(&self, value: Option<bool>) -> Result<(), WidgetError> {
        let mut inner = self.inner.borrow_mut();
        let index = inner
            .options
            .iter()
            .position(|option| option.value == value)
            .ok_or_else(|| {
                log::trace!("toggle group has no {value:?} option");
                WidgetError::UnknownOption {
                    option: format!("{value:?}"),
                }
            })?;
        inner.selected = Some(index);
        Ok(())
    }

    /// `None` when nothing is selected, otherwise the selected option's value.
    pub fn selection(&self) -> Option<Option<bool>> {
        let inner = self.inner.borrow();
        inner.selected.map(|index| inner.options[index].value)
    }

    pub fn clear_selection(&self) {
        self.inner.borrow_mut().selected = None;
    }
}

impl PartialEq for ToggleGroup {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> ToggleGroup {
        ToggleGroup::new([
            ToggleOption::new(Some(true), "Yes"),
            ToggleOption::new(Some(false), "No"),
        ])
    }

    #[test]
    fn starts_without_selection() {
        assert_eq!(yes_no().selection(), None);
    }

    #[test]
    fn selects_by_value() {
        let group = yes_no();
        group.select(Some(false)).expect("option exists");
        assert_eq!(group.selection(), Some(Some(false)));
        group.clear_selection();
        assert_eq!(group.selection(), None);
    }

    #[test]
    fn unknown_value_is_an_error() {
        let group = yes_no();
        assert!(matches!(
            group.select(None),
            Err(WidgetError::UnknownOption { .. })
        ));
    }

    #[test]
    fn unset_option_is_selectable() {
        let group = ToggleGroup::new([
            ToggleOption::new(Some(true), "Yes"),
            ToggleOption::new(Some(false), "No"),
            ToggleOption::new(None, "Not set"),
        ]);
        group.select(None).expect("unset option exists");
        assert_eq!(group.selection(), Some(None));
        assert_eq!(group.options().len(), 3);
    }
}
