//! Row accumulation tables.

use crate::pattern::{Pattern, TableId};

/// Fixed-width accumulator of extracted rows.
///
/// `pending` is the row being populated by the current container iteration.
/// It is promoted into `rows` only when at least one cell is non-empty;
/// an untouched pending row leaves no trace.
#[derive(Debug)]
pub struct Table {
    pending: Vec<Vec<u8>>,
    rows: Vec<Vec<Vec<u8>>>,
}

impl Table {
    pub(crate) fn new(n_cols: usize) -> Self {
        Self {
            pending: vec![Vec::new(); n_cols],
            rows: Vec::new(),
        }
    }

    pub fn n_cols(&self) -> usize {
        self.pending.len()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Overwrites the cell. A member repeated within one object keeps the
    /// last value seen.
    pub fn add_value(&mut self, column: usize, value: &[u8]) {
        let cell = &mut self.pending[column];
        cell.clear();
        cell.extend_from_slice(value);
    }

    /// Promotes the pending row if any cell is non-empty, discards it
    /// otherwise. Either way the next iteration starts from an empty row.
    pub fn add_row(&mut self) {
        if self.pending.iter().all(|cell| cell.is_empty()) {
            return;
        }
        let n_cols = self.pending.len();
        let row = std::mem::replace(&mut self.pending, vec![Vec::new(); n_cols]);
        self.rows.push(row);
    }

    pub(crate) fn rows(&self) -> &[Vec<Vec<u8>>] {
        &self.rows
    }

    pub(crate) fn clear_rows(&mut self) {
        self.rows.clear();
    }
}

/// The tables of one compiled pattern, in order of first appearance during
/// compilation. The set lives for the whole invocation; completed rows are
/// drained on every flush, so successive documents (and successive input
/// files) start from empty tables.
#[derive(Debug)]
pub struct TableSet {
    tables: Vec<Table>,
}

impl TableSet {
    pub fn for_pattern(pattern: &Pattern) -> Self {
        Self {
            tables: pattern
                .table_widths()
                .iter()
                .map(|&n_cols| Table::new(n_cols))
                .collect(),
        }
    }

    pub(crate) fn get_mut(&mut self, id: TableId) -> &mut Table {
        &mut self.tables[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.tables.iter_mut()
    }
}
