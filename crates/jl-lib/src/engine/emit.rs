//! Delimited output of accumulated rows.

use std::io::Write;

use crate::Result;
use crate::table::TableSet;

/// Writes the Cartesian product of every table's completed rows, then
/// resets the tables. Tables without rows contribute empty cells and do not
/// multiply the row count; if no table has rows, nothing is written.
pub(crate) fn flush_tables<W: Write>(tables: &mut TableSet, sep: &[u8], out: &mut W) -> Result<()> {
    let mut n_rows: usize = 1;
    let mut has_rows = false;
    for table in tables.iter() {
        if table.n_rows() > 0 {
            has_rows = true;
            n_rows *= table.n_rows();
        }
    }
    if !has_rows {
        return Ok(());
    }

    for i in 0..n_rows {
        emit_row(tables, sep, i, out)?;
    }

    for table in tables.iter_mut() {
        table.clear_rows();
    }
    Ok(())
}

/// One output line: for each table in registration order, the row selected
/// by cycling `i` through that table's rows. Shorter tables repeat under
/// longer ones, giving a column-major product order.
fn emit_row<W: Write>(tables: &TableSet, sep: &[u8], i: usize, out: &mut W) -> Result<()> {
    let mut first = true;
    for table in tables.iter() {
        let row = (table.n_rows() > 0).then(|| &table.rows()[i % table.n_rows()]);
        for column in 0..table.n_cols() {
            if !first {
                out.write_all(sep)?;
            }
            first = false;
            if let Some(row) = row {
                out.write_all(&row[column])?;
            }
        }
    }
    out.write_all(b"\n")?;
    Ok(())
}
