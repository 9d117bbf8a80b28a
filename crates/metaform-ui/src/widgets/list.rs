use super::WidgetError;
use metaform_foundation::ErrorStatus;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct ListInner {
    items: Vec<String>,
    mandatory: bool,
    min_size: usize,
    max_size: usize,
    status: ErrorStatus,
}

/// Ordered list of strings edited item by item.
///
/// The list can never grow past `max_size`. Emptiness and a short list are
/// reported by [`focus_lost`](Self::focus_lost).
#[derive(Debug, Clone)]
pub struct EditableList {
    inner: Rc<RefCell<ListInner>>,
}

impl EditableList {
    pub fn new(mandatory: bool, min_size: usize, max_size: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListInner {
                items: Vec::new(),
                mandatory,
                min_size,
                max_size,
                status: ErrorStatus::Valid,
            })),
        }
    }

    pub fn items(&self) -> Vec<String> {
        self.inner.borrow().items.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Programmatic replacement; resets the status.
    pub fn set_items(&self, items: Vec<String>) {
        let mut inner = self.inner.borrow_mut();
        inner.items = items;
        inner.status = ErrorStatus::Valid;
    }

    pub fn add(&self, item: impl Into<String>) -> Result<(), WidgetError> {
        let mut inner = self.inner.borrow_mut();
        if inner.items.len() >= inner.max_size {
            log::trace!("list already holds its maximum of {}", inner.max_size);
            return Err(WidgetError::ListFull {
                max: inner.max_size,
            });
        }
        inner.items.push(item.into());
        inner.status = ErrorStatus::Valid;
        Ok(())
    }

    pub fn edit(&self, index: usize, item: impl Into<String>) -> Result<(), WidgetError> {
        let mut inner = self.inner.borrow_mut();
        let len = inner.items.len();
        let slot = inner
            .items
            .get_mut(index)
            .ok_or(WidgetError::IndexOutOfBounds { index, len })?;
        *slot = item.into();
        Ok(())
    }

    pub fn remove(&self, index: usize) -> Result<String, WidgetError> {
        let mut inner = self.inner.borrow_mut();
        let len = inner.items.len();
        if index >= len {
            return Err(WidgetError::IndexOutOfBounds { index, len });
        }
        inner.status = ErrorStatus::Valid;
        Ok(inner.items.remove(index))
    }

    pub fn focus_lost(&self) -> ErrorStatus {
        let mut inner = self.inner.borrow_mut();
        let len = inner.items.len();
        inner.status = if len == 0 && inner.mandatory {
            ErrorStatus::Mandatory
        } else if len > 0 && (len < inner.min_size || len > inner.max_size) {
            ErrorStatus::range(inner.min_size, inner.max_size)
        } else {
            ErrorStatus::Valid
        };
        inner.status.clone()
    }

    pub fn error_status(&self) -> ErrorStatus {
        self.inner.borrow().status.clone()
    }
}

impl PartialEq for EditableList {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edit_remove() {
        let list = EditableList::new(false, 0, 5);
        list.add("a").expect("room");
        list.add("b").expect("room");
        list.edit(0, "z").expect("index exists");
        assert_eq!(list.items(), ["z", "b"]);
        assert_eq!(list.remove(1), Ok("b".to_string()));
        assert_eq!(
            list.remove(3),
            Err(WidgetError::IndexOutOfBounds { index: 3, len: 1 })
        );
    }

    #[test]
    fn cannot_grow_past_max() {
        let list = EditableList::new(false, 0, 1);
        list.add("only").expect("room");
        assert_eq!(list.add("more"), Err(WidgetError::ListFull { max: 1 }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn exit_checks_size() {
        let list = EditableList::new(true, 2, 4);
        assert_eq!(list.focus_lost(), ErrorStatus::Mandatory);
        list.add("one").expect("room");
        assert_eq!(list.focus_lost(), ErrorStatus::Range("2 - 4".into()));
        list.add("two").expect("room");
        assert_eq!(list.focus_lost(), ErrorStatus::Valid);
    }
}
