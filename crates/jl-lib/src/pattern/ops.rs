//! The compiled operator tree.

use std::fmt::Write;

/// Index of a table within a pattern's [`TableSet`](crate::table::TableSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableId(pub(crate) usize);

impl TableId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One named property of an object pattern.
///
/// The name is raw bytes: member keys are matched byte-for-byte against the
/// unprocessed lexemes the scanner produces, so escape sequences in a quoted
/// pattern name line up with escape sequences in the document.
#[derive(Debug)]
pub struct Prop {
    pub name: Vec<u8>,
    pub op: Op,
}

/// A node of a compiled pattern.
///
/// `Array` and `Object` walk containers; `Collect` captures one scalar into
/// a table cell. An `Array` carries a table only when it collects scalars
/// directly (`[*]`); an `Object` carries one only when at least one property
/// is a `Collect`.
#[derive(Debug)]
pub enum Op {
    Array {
        next: Box<Op>,
        table: Option<TableId>,
        is_root: bool,
    },
    Object {
        props: Vec<Prop>,
        table: Option<TableId>,
        is_root: bool,
    },
    Collect {
        table: TableId,
        column: usize,
    },
}

impl Op {
    /// Marks the shallowest branching operator as the flush point.
    ///
    /// Wrappers that cannot branch (an array over a single container, an
    /// object whose single property is itself a container) are mere descent
    /// paths; the first operator that can yield more than one collected
    /// value per visit becomes the root. Returns false if no root exists,
    /// which a grammar-valid pattern never produces.
    pub(crate) fn select_root(&mut self) -> bool {
        match self {
            Op::Array { next, is_root, .. } => {
                if matches!(**next, Op::Collect { .. }) {
                    *is_root = true;
                    true
                } else {
                    next.select_root()
                }
            }
            Op::Object { props, is_root, .. } => match props.as_mut_slice() {
                [] => false,
                [only] if !matches!(only.op, Op::Collect { .. }) => only.op.select_root(),
                _ => {
                    *is_root = true;
                    true
                }
            },
            Op::Collect { .. } => false,
        }
    }

    pub(crate) fn dump_into(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        match self {
            Op::Array {
                next,
                table,
                is_root,
            } => {
                out.push_str(&pad);
                out.push_str("Array");
                Self::dump_attrs(out, *table, *is_root);
                out.push('\n');
                next.dump_into(out, indent + 1);
            }
            Op::Object {
                props,
                table,
                is_root,
            } => {
                out.push_str(&pad);
                out.push_str("Object");
                Self::dump_attrs(out, *table, *is_root);
                out.push('\n');
                for prop in props {
                    let _ = writeln!(
                        out,
                        "{pad}  prop {:?}",
                        String::from_utf8_lossy(&prop.name)
                    );
                    prop.op.dump_into(out, indent + 2);
                }
            }
            Op::Collect { table, column } => {
                let _ = writeln!(out, "{pad}Collect t{}[{column}]", table.0);
            }
        }
    }

    fn dump_attrs(out: &mut String, table: Option<TableId>, is_root: bool) {
        if is_root {
            out.push_str(" root");
        }
        if let Some(id) = table {
            let _ = write!(out, " table=t{}", id.0);
        }
    }
}
