//! Scratch buffer handed to [`TextFieldState::edit`](super::TextFieldState::edit).
//!
//! Edits made here are not visible to anyone until the closure returns and the
//! state decides whether to commit them. All offsets are UTF-8 byte offsets and
//! every cursor movement lands on a char boundary.

use super::TextRange;

/// Mutable copy of a field's text and selection.
///
/// ```
/// use metaform_foundation::text::{TextFieldBuffer, TextRange};
///
/// let mut buffer = TextFieldBuffer::new("12");
/// buffer.place_cursor_at_start();
/// buffer.insert("-");
/// assert_eq!(buffer.text(), "-12");
/// assert_eq!(buffer.selection(), TextRange::cursor(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFieldBuffer {
    text: String,
    selection: TextRange,
}

impl TextFieldBuffer {
    /// Cursor is placed at the end.
    pub fn new(initial_text: impl Into<String>) -> Self {
        let text: String = initial_text.into();
        let selection = TextRange::cursor(text.len());
        Self { text, selection }
    }

    pub fn with_selection(text: impl Into<String>, selection: TextRange) -> Self {
        let text: String = text.into();
        let selection = selection.coerce_in(text.len());
        Self { text, selection }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn selection(&self) -> TextRange {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.collapsed()
    }

    /// Replaces `range` with `replacement` and leaves the cursor after it.
    pub fn replace(&mut self, range: TextRange, replacement: &str) {
        let start = self.floor_boundary(range.min().min(self.text.len()));
        let end = self.ceil_boundary(range.max().min(self.text.len()));
        self.text.replace_range(start..end, replacement);
        self.selection = TextRange::cursor(start + replacement.len());
    }

    /// Types `text` at the cursor, replacing the selection if there is one.
    pub fn insert(&mut self, text: &str) {
        self.replace(self.selection, text);
    }

    pub fn delete(&mut self, range: TextRange) {
        self.replace(range, "");
    }

    /// Backspace.
    pub fn delete_before_cursor(&mut self) {
        if self.has_selection() {
            self.delete(self.selection);
        } else if self.selection.start > 0 {
            let pos = self.selection.start;
            self.delete(TextRange::new(self.prev_boundary(pos), pos));
        }
    }

    /// Forward delete.
    pub fn delete_after_cursor(&mut self) {
        if self.has_selection() {
            self.delete(self.selection);
        } else if self.selection.start < self.text.len() {
            let pos = self.selection.start;
            self.delete(TextRange::new(pos, self.next_boundary(pos)));
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = TextRange::zero();
    }

    /// Replaces the whole text and puts the cursor at the end.
    pub fn replace_all(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.place_cursor_at_end();
    }

    pub fn place_cursor_at_start(&mut self) {
        self.selection = TextRange::zero();
    }

    pub fn place_cursor_at_end(&mut self) {
        self.selection = TextRange::cursor(self.text.len());
    }

    /// Places the cursor at byte `index`, rounded down to a char boundary.
    pub fn place_cursor_before_char(&mut self, index: usize) {
        let pos = self.floor_boundary(index.min(self.text.len()));
        self.selection = TextRange::cursor(pos);
    }

    /// Moves left one char, or collapses the selection to its left edge.
    pub fn move_cursor_left(&mut self) {
        let target = if self.has_selection() {
            self.selection.min()
        } else {
            self.prev_boundary(self.selection.start)
        };
        self.selection = TextRange::cursor(target);
    }

    /// Moves right one char, or collapses the selection to its right edge.
    pub fn move_cursor_right(&mut self) {
        let target = if self.has_selection() {
            self.selection.max()
        } else {
            self.next_boundary(self.selection.end)
        };
        self.selection = TextRange::cursor(target);
    }

    /// Shift+Left: the anchor stays at `end`, the caret moves.
    pub fn extend_selection_left(&mut self) {
        let caret = self.prev_boundary(self.selection.start);
        self.selection = TextRange::new(caret, self.selection.end);
    }

    /// Shift+Right: the anchor stays at `start`, the caret moves.
    pub fn extend_selection_right(&mut self) {
        let caret = self.next_boundary(self.selection.end);
        self.selection = TextRange::new(self.selection.start, caret);
    }

    pub fn select(&mut self, range: TextRange) {
        self.selection = range.coerce_in(self.text.len());
    }

    pub fn select_all(&mut self) {
        self.selection = TextRange::all(self.text.len());
    }

    /// Selected text, if the selection is not collapsed.
    pub fn selected_text(&self) -> Option<&str> {
        self.has_selection()
            .then(|| &self.text[self.selection.min()..self.selection.max()])
    }

    fn prev_boundary(&self, from: usize) -> usize {
        self.text[..from.min(self.text.len())]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, from: usize) -> usize {
        let from = from.min(self.text.len());
        self.text[from..]
            .chars()
            .next()
            .map_or(from, |c| from + c.len_utf8())
    }

    fn floor_boundary(&self, mut pos: usize) -> usize {
        while pos > 0 && !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn ceil_boundary(&self, mut pos: usize) -> usize {
        while pos < self.text.len() && !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_selection() {
        let mut buffer = TextFieldBuffer::new("1234");
        buffer.select(TextRange::new(1, 3));
        buffer.insert("9");
        assert_eq!(buffer.text(), "194");
        assert_eq!(buffer.selection(), TextRange::cursor(2));
    }

    #[test]
    fn backspace_and_delete_at_edges_are_noops() {
        let mut buffer = TextFieldBuffer::new("ab");
        buffer.place_cursor_at_start();
        buffer.delete_before_cursor();
        assert_eq!(buffer.text(), "ab");
        buffer.place_cursor_at_end();
        buffer.delete_after_cursor();
        assert_eq!(buffer.text(), "ab");
        buffer.delete_before_cursor();
        assert_eq!(buffer.text(), "a");
    }

    #[test]
    fn cursor_moves_over_whole_chars() {
        let mut buffer = TextFieldBuffer::new("aé");
        buffer.move_cursor_left();
        assert_eq!(buffer.selection(), TextRange::cursor(1));
        buffer.move_cursor_right();
        assert_eq!(buffer.selection(), TextRange::cursor(3));
        buffer.delete_before_cursor();
        assert_eq!(buffer.text(), "a");
    }

    #[test]
    fn cursor_placement_rounds_to_boundary() {
        let mut buffer = TextFieldBuffer::new("é1");
        buffer.place_cursor_before_char(1);
        assert_eq!(buffer.selection(), TextRange::cursor(0));
    }

    #[test]
    fn selection_extends_and_collapses() {
        let mut buffer = TextFieldBuffer::new("abc");
        buffer.extend_selection_left();
        buffer.extend_selection_left();
        assert_eq!(buffer.selected_text(), Some("bc"));
        buffer.move_cursor_left();
        assert_eq!(buffer.selection(), TextRange::cursor(1));
        assert_eq!(buffer.selected_text(), None);
    }

    #[test]
    fn replace_all_moves_cursor_to_end() {
        let mut buffer = TextFieldBuffer::with_selection("old", TextRange::zero());
        buffer.replace_all("fresh");
        assert_eq!(buffer.text(), "fresh");
        assert_eq!(buffer.selection(), TextRange::cursor(5));
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
