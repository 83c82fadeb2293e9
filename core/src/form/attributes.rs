//! Dynamic attribute rows.
//!
//! The specifications grid always has at least one row. Editing the
//! last row grows the list by one fresh empty row, so there is always
//! a blank row to continue into; removal is by row id, never by index.

use crate::types::AttributeRow;
use crate::types::draft::fresh_row_id;

#[derive(Clone, Debug)]
pub struct AttributeRows {
    rows: Vec<AttributeRow>,
}

impl Default for AttributeRows {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeRows {
    /// Creates the grid with one empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![AttributeRow::empty()],
        }
    }

    /// Adopts rows from a persisted draft. An empty list gets one fresh
    /// row; rows saved without an id get one.
    pub fn from_saved(mut rows: Vec<AttributeRow>) -> Self {
        for row in &mut rows {
            if row.id.is_empty() {
                row.id = fresh_row_id();
            }
        }
        if rows.is_empty() {
            rows.push(AttributeRow::empty());
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[AttributeRow] {
        &self.rows
    }

    /// Mutable row access for input widgets. Growth still only happens
    /// through [`note_edited`](Self::note_edited).
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut AttributeRow> {
        self.rows.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<AttributeRow> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a fresh empty row, returning its id.
    pub fn add(&mut self) -> String {
        let row = AttributeRow::empty();
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    /// Records that the row's attribute or values text changed. If it
    /// is the last row, a fresh empty row is appended and its id
    /// returned so the caller can move focus there.
    pub fn note_edited(&mut self, id: &str) -> Option<String> {
        if self.rows.last().is_some_and(|row| row.id == id) {
            Some(self.add())
        } else {
            None
        }
    }

    /// Sets the row's attribute text. Returns the id of a newly grown
    /// row, if the edit targeted the last row.
    pub fn set_attribute(&mut self, id: &str, text: impl Into<String>) -> Option<String> {
        let row = self.rows.iter_mut().find(|row| row.id == id)?;
        row.attribute = text.into();
        self.note_edited(id)
    }

    /// Sets the row's values text. Returns the id of a newly grown row,
    /// if the edit targeted the last row.
    pub fn set_values(&mut self, id: &str, text: impl Into<String>) -> Option<String> {
        let row = self.rows.iter_mut().find(|row| row.id == id)?;
        row.values = text.into();
        self.note_edited(id)
    }

    /// Removes exactly the row with `id`. Removing the only row
    /// re-seeds one empty row.
    pub fn remove(&mut self, id: &str) {
        self.rows.retain(|row| row.id != id);
        if self.rows.is_empty() {
            self.rows.push(AttributeRow::empty());
        }
    }
}
