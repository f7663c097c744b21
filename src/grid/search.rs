//! Search strip state: one target column plus a query buffer.
//!
//! Committing the query writes a single substring condition on the
//! chosen column, replacing the dataset filter wholesale; committing
//! an empty query clears it. The controller owns that wiring, this
//! type only tracks what the user typed and which column they aimed
//! at.

use super::view::ColumnHeader;

#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    query: String,
    column_index: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        SearchBar::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Cycles the target column forward, wrapping.
    pub fn next_column(&mut self, column_count: usize) {
        if column_count > 0 {
            self.column_index = (self.column_index + 1) % column_count;
        }
    }

    /// Cycles the target column backward, wrapping.
    pub fn prev_column(&mut self, column_count: usize) {
        if column_count > 0 {
            self.column_index = (self.column_index + column_count - 1) % column_count;
        }
    }

    /// Pulls the index back in range after the visible column set
    /// shrank.
    pub fn clamp_column(&mut self, column_count: usize) {
        if column_count == 0 {
            self.column_index = 0;
        } else if self.column_index >= column_count {
            self.column_index = column_count - 1;
        }
    }

    /// The column the query targets, if any columns are visible.
    pub fn selected_column<'a>(&self, columns: &'a [ColumnHeader]) -> Option<&'a ColumnHeader> {
        columns.get(self.column_index)
    }
}
