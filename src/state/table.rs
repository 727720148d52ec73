//! Table input editor state.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::{ContentItem, TableDocument};

/// Header labels are fixed; the table editor always produces two-column
/// vocabulary tables regardless of the configured width.
pub const TABLE_HEADERS: [&str; 2] = ["Word", "Translation"];

/// One editable row; identity is the generated id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub columns: Vec<String>,
}

impl TableRow {
    fn empty(width: usize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            columns: vec![String::new(); width],
        }
    }

    fn is_blank(&self) -> bool {
        self.columns.iter().all(|cell| cell.trim().is_empty())
    }
}

/// Component-local state for the table editor. At least one row always
/// exists.
#[derive(Clone, Debug)]
pub struct TableEditorState {
    pub column_count: usize,
    pub rows: Vec<TableRow>,
}

impl Default for TableEditorState {
    fn default() -> Self {
        Self::new(2)
    }
}

impl TableEditorState {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            rows: vec![TableRow::empty(column_count)],
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(TableRow::empty(self.column_count));
    }

    /// Remove a row by id; no-op when only one row remains.
    pub fn remove_row(&mut self, id: &str) {
        if self.rows.len() == 1 {
            return;
        }
        self.rows.retain(|row| row.id != id);
    }

    pub fn set_cell(&mut self, row_id: &str, column: usize, value: String) {
        if let Some(cell) = self
            .rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .and_then(|row| row.columns.get_mut(column))
        {
            *cell = value;
        }
    }

    /// Build the content item for submission, excluding rows whose cells are
    /// all blank after trimming. `None` when nothing remains; the caller
    /// alerts and must not invoke its add-content callback.
    pub fn build_content(&self) -> Option<ContentItem> {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| row.columns.clone())
            .collect();
        if rows.is_empty() {
            return None;
        }
        let document = TableDocument {
            headers: TABLE_HEADERS.iter().map(|h| (*h).to_owned()).collect(),
            rows,
        };
        Some(ContentItem::table(&document))
    }

    /// Back to a single empty row after a successful submit.
    pub fn reset(&mut self) {
        self.rows = vec![TableRow::empty(self.column_count)];
    }
}
