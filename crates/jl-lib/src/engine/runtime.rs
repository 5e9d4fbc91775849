//! The extraction runtime: drives the lexer with the operator tree.
//!
//! A value whose shape disagrees with the operator expecting it is skipped
//! structurally, not reported — the extractor is a filter over possibly
//! heterogeneous streams. Everything else that goes wrong is fatal.

use std::io::{Read, Write};

use crate::pattern::{Op, Pattern, Prop, TableId};
use crate::scan::{Lexer, TokenKind};
use crate::table::TableSet;
use crate::{Error, Result};

use super::emit;

/// Interprets a compiled pattern over document streams, accumulating rows
/// and emitting the Cartesian product at every root completion.
///
/// One runtime serves all input streams of an invocation, so the tables and
/// the output handle outlive any single stream.
pub struct Runtime<'p, W> {
    pattern: &'p Pattern,
    tables: TableSet,
    sep: Vec<u8>,
    out: W,
}

impl<'p, W: Write> Runtime<'p, W> {
    pub fn new(pattern: &'p Pattern, sep: &str, out: W) -> Self {
        Self {
            pattern,
            tables: TableSet::for_pattern(pattern),
            sep: sep.as_bytes().to_vec(),
            out,
        }
    }

    /// Extracts every top-level value in `input`. The stream must hold at
    /// least one value.
    pub fn process<R: Read>(&mut self, input: R) -> Result<()> {
        let mut lexer = Lexer::new(input);
        let pattern = self.pattern;
        loop {
            self.run(&mut lexer, pattern.root())?;
            if lexer.peek_token()? == TokenKind::Eof {
                return Ok(());
            }
        }
    }

    /// Consumes the runtime and returns the output handle.
    pub fn into_output(self) -> W {
        self.out
    }

    fn run<R: Read>(&mut self, lexer: &mut Lexer<R>, op: &Op) -> Result<()> {
        match op {
            Op::Array {
                next,
                table,
                is_root,
            } => self.run_array(lexer, next, *table, *is_root),
            Op::Object {
                props,
                table,
                is_root,
            } => self.run_object(lexer, props, *table, *is_root),
            Op::Collect { table, column } => self.run_collect(lexer, *table, *column),
        }
    }

    fn run_array<R: Read>(
        &mut self,
        lexer: &mut Lexer<R>,
        next: &Op,
        table: Option<TableId>,
        is_root: bool,
    ) -> Result<()> {
        if lexer.peek_token()? != TokenKind::BeginArray {
            return skip_value(lexer);
        }
        lexer.next_token()?;

        if lexer.peek_token()? == TokenKind::EndArray {
            lexer.next_token()?;
            return Ok(());
        }

        loop {
            self.run(lexer, next)?;
            if let Some(id) = table {
                self.tables.get_mut(id).add_row();
            }
            match lexer.next_token()? {
                TokenKind::MemberSep => continue,
                TokenKind::EndArray => break,
                _ => return Err(Error::ExpectedArrayEnd),
            }
        }

        if let Some(id) = table {
            self.tables.get_mut(id).add_row();
        }
        if is_root {
            self.flush()?;
        }
        Ok(())
    }

    fn run_object<R: Read>(
        &mut self,
        lexer: &mut Lexer<R>,
        props: &[Prop],
        table: Option<TableId>,
        is_root: bool,
    ) -> Result<()> {
        if lexer.peek_token()? != TokenKind::BeginObject {
            return skip_value(lexer);
        }
        lexer.next_token()?;

        let mut kind = lexer.next_token()?;
        while kind == TokenKind::Str {
            let matched = props.iter().position(|p| p.name == lexer.text());

            accept(lexer, TokenKind::PairSep)?;

            match matched {
                Some(i) => self.run(lexer, &props[i].op)?,
                None => skip_value(lexer)?,
            }

            kind = lexer.next_token()?;
            if kind != TokenKind::MemberSep {
                break;
            }
            kind = lexer.next_token()?;
        }

        if kind != TokenKind::EndObject {
            return Err(Error::ExpectedObjectEnd);
        }

        if let Some(id) = table {
            self.tables.get_mut(id).add_row();
        }
        if is_root {
            self.flush()?;
        }
        Ok(())
    }

    /// A container where a scalar was expected stores nothing and is
    /// skipped whole.
    fn run_collect<R: Read>(
        &mut self,
        lexer: &mut Lexer<R>,
        table: TableId,
        column: usize,
    ) -> Result<()> {
        match lexer.peek_token()? {
            TokenKind::BeginArray => skip_array(lexer),
            TokenKind::BeginObject => skip_object(lexer),
            kind if kind.is_literal() => {
                self.tables.get_mut(table).add_value(column, lexer.text());
                lexer.next_token()?;
                Ok(())
            }
            kind => Err(Error::UnexpectedToken(kind)),
        }
    }

    fn flush(&mut self) -> Result<()> {
        emit::flush_tables(&mut self.tables, &self.sep, &mut self.out)
    }
}

fn accept<R: Read>(lexer: &mut Lexer<R>, expected: TokenKind) -> Result<()> {
    let found = lexer.next_token()?;
    if found != expected {
        return Err(Error::UnexpectedToken(found));
    }
    Ok(())
}

/// Consumes one whole value without recording anything.
fn skip_value<R: Read>(lexer: &mut Lexer<R>) -> Result<()> {
    match lexer.peek_token()? {
        TokenKind::BeginArray => skip_array(lexer),
        TokenKind::BeginObject => skip_object(lexer),
        kind if kind.is_literal() => {
            lexer.next_token()?;
            Ok(())
        }
        kind => Err(Error::UnexpectedToken(kind)),
    }
}

fn skip_array<R: Read>(lexer: &mut Lexer<R>) -> Result<()> {
    accept(lexer, TokenKind::BeginArray)?;
    if lexer.peek_token()? == TokenKind::EndArray {
        lexer.next_token()?;
        return Ok(());
    }
    loop {
        skip_value(lexer)?;
        match lexer.next_token()? {
            TokenKind::MemberSep => continue,
            TokenKind::EndArray => return Ok(()),
            _ => return Err(Error::ExpectedArrayEnd),
        }
    }
}

fn skip_object<R: Read>(lexer: &mut Lexer<R>) -> Result<()> {
    accept(lexer, TokenKind::BeginObject)?;
    if lexer.peek_token()? == TokenKind::EndObject {
        lexer.next_token()?;
        return Ok(());
    }
    loop {
        accept(lexer, TokenKind::Str)?;
        accept(lexer, TokenKind::PairSep)?;
        skip_value(lexer)?;
        match lexer.next_token()? {
            TokenKind::MemberSep => continue,
            TokenKind::EndObject => return Ok(()),
            _ => return Err(Error::ExpectedObjectEnd),
        }
    }
}
