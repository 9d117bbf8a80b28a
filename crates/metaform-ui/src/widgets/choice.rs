use super::WidgetError;
use metaform_foundation::ErrorStatus;
use std::cell::RefCell;
use std::rc::Rc;

/// An entry of a [`ChoiceBox`]: the value key and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub key: &'static str,
    pub label: String,
}

impl ChoiceItem {
    pub fn new(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

#[derive(Debug)]
struct ChoiceInner {
    items: Vec<ChoiceItem>,
    selected: Option<usize>,
    mandatory: bool,
    editable: bool,
    status: ErrorStatus,
}

/// Single choice among a fixed list of items, in the order given.
///
/// A box is editable (the user may type a label) unless it is mandatory and
/// limited to its items. Only optional boxes can be cleared by the user; a
/// mandatory box left empty reports [`ErrorStatus::Mandatory`] when it loses
/// focus.
#[derive(Debug, Clone)]
pub struct ChoiceBox {
    inner: Rc<RefCell<ChoiceInner>>,
}

impl ChoiceBox {
    pub fn new(items: Vec<ChoiceItem>, mandatory: bool, limited_values: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChoiceInner {
                items,
                selected: None,
                mandatory,
                editable: !(mandatory && limited_values),
                status: ErrorStatus::Valid,
            })),
        }
    }

    pub fn items(&self) -> Vec<ChoiceItem> {
        self.inner.borrow().items.clone()
    }

    pub fn is_editable(&self) -> bool {
        self.inner.borrow().editable
    }

    pub fn is_clearable(&self) -> bool {
        !self.inner.borrow().mandatory
    }

    pub fn selection(&self) -> Option<&'static str> {
        let inner = self.inner.borrow();
        inner.selected.map(|index| inner.items[index].key)
    }

    pub fn selected_label(&self) -> Option<String> {
        let inner = self.inner.borrow();
        inner.selected.map(|index| inner.items[index].label.clone())
    }

    /// User selection by key; clears any error.
    pub fn select(&self, key: &str) -> Result<(), WidgetError> {
        let mut inner = self.inner.borrow_mut();
        let index = inner
            .items
            .iter()
            .position(|item| item.key == key)
            .ok_or_else(|| {
                log::trace!("choice has no item `{key}`");
                WidgetError::UnknownOption {
                    option: key.to_string(),
                }
            })?;
        inner.selected = Some(index);
        inner.status = ErrorStatus::Valid;
        Ok(())
    }

    /// User typed a label into an editable box.
    pub fn select_label(&self, label: &str) -> Result<(), WidgetError> {
        let key = {
            let inner = self.inner.borrow();
            if !inner.editable {
                log::trace!("typed label `{label}` refused by a fixed choice");
                return Err(WidgetError::NotEditable);
            }
            inner
                .items
                .iter()
                .find(|item| item.label.eq_ignore_ascii_case(label))
                .map(|item| item.key)
        };
        match key {
            Some(key) => self.select(key),
            None if label.is_empty() => self.clear(),
            None => {
                log::trace!("no choice labelled `{label}`");
                Err(WidgetError::UnknownOption {
                    option: label.to_string(),
                })
            }
        }
    }

    /// User cleared the box.
    pub fn clear(&self) -> Result<(), WidgetError> {
        let mut inner = self.inner.borrow_mut();
        if inner.mandatory {
            log::trace!("mandatory choice cannot be cleared");
            return Err(WidgetError::NotClearable);
        }
        inner.selected = None;
        Ok(())
    }

    /// Programmatic update; `None` empties the box even when it is mandatory.
    pub fn set_selection(&self, key: Option<&str>) -> Result<(), WidgetError> {
        match key {
            Some(key) => self.select(key),
            None => {
                let mut inner = self.inner.borrow_mut();
                inner.selected = None;
                inner.status = ErrorStatus::Valid;
                Ok(())
            }
        }
    }

    pub fn focus_lost(&self) -> ErrorStatus {
        let mut inner = self.inner.borrow_mut();
        inner.status = if inner.mandatory && inner.selected.is_none() {
            ErrorStatus::Mandatory
        } else {
            ErrorStatus::Valid
        };
        inner.status.clone()
    }

    pub fn error_status(&self) -> ErrorStatus {
        self.inner.borrow().status.clone()
    }
}

impl PartialEq for ChoiceBox {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colours(mandatory: bool) -> ChoiceBox {
        ChoiceBox::new(
            vec![
                ChoiceItem::new("RED", "Red"),
                ChoiceItem::new("DARK_BLUE", "Dark Blue"),
            ],
            mandatory,
            true,
        )
    }

    #[test]
    fn keeps_item_order() {
        let keys: Vec<_> = colours(false).items().iter().map(|i| i.key).collect();
        assert_eq!(keys, ["RED", "DARK_BLUE"]);
    }

    #[test]
    fn mandatory_limited_box_is_not_editable() {
        assert!(!colours(true).is_editable());
        assert!(colours(false).is_editable());
        assert_eq!(
            colours(true).select_label("Red"),
            Err(WidgetError::NotEditable)
        );
    }

    #[test]
    fn typed_label_selects_item() {
        let choice = colours(false);
        choice.select_label("dark blue").expect("label matches");
        assert_eq!(choice.selection(), Some("DARK_BLUE"));
        choice.select_label("").expect("blank clears");
        assert_eq!(choice.selection(), None);
    }

    #[test]
    fn only_optional_boxes_clear() {
        let required = colours(true);
        required.select("RED").expect("exists");
        assert_eq!(required.clear(), Err(WidgetError::NotClearable));
        assert_eq!(required.selection(), Some("RED"));
        let optional = colours(false);
        optional.select("RED").expect("exists");
        optional.clear().expect("clearable");
        assert_eq!(optional.selection(), None);
    }

    #[test]
    fn empty_mandatory_box_flags_on_exit() {
        let choice = colours(true);
        assert_eq!(choice.focus_lost(), ErrorStatus::Mandatory);
        choice.select("RED").expect("exists");
        assert_eq!(choice.error_status(), ErrorStatus::Valid);
        assert_eq!(colours(false).focus_lost(), ErrorStatus::Valid);
    }
}
