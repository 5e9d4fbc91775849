//! Compiles the extraction DSL into an operator tree.
//!
//! Grammar:
//!
//! ```text
//! pattern  := array | object
//! array    := '[' ('*' | array | object) ']'   ; ']' optional at end of input
//! object   := '{' prop (',' prop)* '}'         ; '}' optional at end of input
//! prop     := name | name array | name object
//! name     := '"' raw bytes '"' | run of bytes excluding ",[]{}"
//! ```
//!
//! Bareword names keep every byte up to the next delimiter, whitespace
//! included: `{a, b}` matches the member name `" b"`. Quoted names keep the
//! bytes between the quotes verbatim — `\"` does not terminate the name and
//! the backslash stays in it, matching the unprocessed lexemes the scanner
//! produces for member keys. Bytes after the outermost closing bracket are
//! ignored.

use super::ops::{Op, Prop, TableId};

/// A pattern compilation failure: message plus the byte span of the
/// offending position in the pattern source.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid pattern: {message}")]
pub struct PatternError {
    pub message: String,
    pub span: std::ops::Range<usize>,
}

/// A compiled pattern: the operator tree plus its table schemas.
#[derive(Debug)]
pub struct Pattern {
    root: Op,
    /// Column count per table, indexed by [`TableId`].
    widths: Vec<usize>,
}

impl Pattern {
    /// Compiles `src` into an operator tree and selects the root.
    pub fn compile(src: &str) -> Result<Self, PatternError> {
        let mut compiler = Compiler {
            src: src.as_bytes(),
            pos: 0,
            widths: Vec::new(),
        };

        let mut root = match compiler.peek() {
            Some(b'[') => compiler.parse_array()?,
            Some(b'{') => compiler.parse_object()?,
            _ => return Err(compiler.err("pattern must start with '[' or '{'")),
        };

        if !root.select_root() {
            return Err(PatternError {
                message: "pattern collects nothing".into(),
                span: 0..src.len(),
            });
        }

        Ok(Pattern {
            root,
            widths: compiler.widths,
        })
    }

    pub fn root(&self) -> &Op {
        &self.root
    }

    /// Column count of each table, in registration order.
    pub fn table_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Text rendering of the operator tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.root.dump_into(&mut out, 0);
        out
    }
}

struct Compiler<'s> {
    src: &'s [u8],
    pos: usize,
    /// Column count per table; tables register in order of first appearance.
    widths: Vec<usize>,
}

impl Compiler<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn err(&self, message: impl Into<String>) -> PatternError {
        let start = self.pos.min(self.src.len());
        let end = (self.pos + 1).min(self.src.len());
        PatternError {
            message: message.into(),
            span: start..end.max(start),
        }
    }

    fn new_table(&mut self) -> TableId {
        self.widths.push(0);
        TableId(self.widths.len() - 1)
    }

    fn new_column(&mut self, table: TableId) -> usize {
        let column = self.widths[table.0];
        self.widths[table.0] += 1;
        column
    }

    /// Caller has verified the `[` at the current position.
    fn parse_array(&mut self) -> Result<Op, PatternError> {
        self.bump();

        let (next, table) = match self.peek() {
            Some(b'*') => {
                self.bump();
                let table = self.new_table();
                let column = self.new_column(table);
                (Op::Collect { table, column }, Some(table))
            }
            Some(b'[') => (self.parse_array()?, None),
            Some(b'{') => (self.parse_object()?, None),
            _ => return Err(self.err("expected '*', '[' or '{' after '['")),
        };

        match self.peek() {
            None => {}
            Some(b']') => self.bump(),
            Some(_) => return Err(self.err("expected ']'")),
        }

        Ok(Op::Array {
            next: Box::new(next),
            table,
            is_root: false,
        })
    }

    /// Caller has verified the `{` at the current position.
    fn parse_object(&mut self) -> Result<Op, PatternError> {
        let mut props: Vec<Prop> = Vec::new();
        let mut table: Option<TableId> = None;

        loop {
            // Consume the '{' or the ',' that led here.
            self.bump();
            let name = self.parse_name()?;

            let op = match self.peek() {
                Some(b',') | Some(b'}') | None => {
                    let table = match table {
                        Some(id) => id,
                        None => {
                            let id = self.new_table();
                            table = Some(id);
                            id
                        }
                    };
                    let column = self.new_column(table);
                    Op::Collect { table, column }
                }
                Some(b'{') => self.parse_object()?,
                Some(b'[') => self.parse_array()?,
                Some(_) => return Err(self.err("expected ',', '[', '{' or '}' after name")),
            };

            props.push(Prop { name, op });

            match self.peek() {
                Some(b',') => continue,
                Some(b'}') => {
                    self.bump();
                    break;
                }
                None => break,
                Some(_) => return Err(self.err("expected ',' or '}'")),
            }
        }

        Ok(Op::Object {
            props,
            table,
            is_root: false,
        })
    }

    /// A quoted name or a bareword. Barewords may not be empty; a quoted
    /// name left open runs to the end of the pattern.
    fn parse_name(&mut self) -> Result<Vec<u8>, PatternError> {
        if self.peek() == Some(b'"') {
            self.bump();
            let start = self.pos;
            let mut escaped = false;
            while let Some(byte) = self.peek() {
                match byte {
                    b'"' if !escaped => {
                        let name = self.src[start..self.pos].to_vec();
                        self.bump();
                        return Ok(name);
                    }
                    b'\\' => {
                        escaped = !escaped;
                        self.bump();
                    }
                    _ => {
                        escaped = false;
                        self.bump();
                    }
                }
            }
            return Ok(self.src[start..self.pos].to_vec());
        }

        let start = self.pos;
        while let Some(byte) = self.peek() {
            if matches!(byte, b',' | b'[' | b']' | b'{' | b'}') {
                break;
            }
            self.bump();
        }
        if self.pos == start {
            return Err(self.err("empty property name"));
        }
        Ok(self.src[start..self.pos].to_vec())
    }
}
