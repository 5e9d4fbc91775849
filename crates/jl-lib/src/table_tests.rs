use crate::pattern::Pattern;
use crate::table::{Table, TableSet};

#[test]
fn promotes_row_with_any_value() {
    let mut table = Table::new(2);
    table.add_value(1, b"x");
    table.add_row();
    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.rows()[0][0], b"");
    assert_eq!(table.rows()[0][1], b"x");
}

#[test]
fn discards_all_empty_row() {
    let mut table = Table::new(2);
    table.add_row();
    assert_eq!(table.n_rows(), 0);
}

#[test]
fn empty_value_does_not_promote_alone() {
    let mut table = Table::new(1);
    table.add_value(0, b"");
    table.add_row();
    assert_eq!(table.n_rows(), 0);
}

#[test]
fn pending_resets_after_promotion() {
    let mut table = Table::new(2);
    table.add_value(0, b"x");
    table.add_row();
    table.add_row();
    assert_eq!(table.n_rows(), 1);
}

#[test]
fn add_value_overwrites() {
    let mut table = Table::new(1);
    table.add_value(0, b"first");
    table.add_value(0, b"second");
    table.add_row();
    assert_eq!(table.rows()[0][0], b"second");
}

#[test]
fn table_set_matches_pattern_schemas() {
    let pattern = Pattern::compile("{a,b,c[*]}").unwrap();
    let set = TableSet::for_pattern(&pattern);
    let widths: Vec<usize> = set.iter().map(|t| t.n_cols()).collect();
    assert_eq!(widths, [2, 1]);
}
