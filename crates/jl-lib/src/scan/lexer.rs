//! Pull lexer for the document grammar.
//!
//! Tokens are produced one at a time with a single token of lookahead. The
//! lexeme accumulates in a buffer that is reused across tokens: the slice
//! returned by [`Lexer::text`] is valid until the next fresh read, which the
//! borrow checker enforces on callers. String escapes are *not* processed —
//! the bytes between the quotes pass through verbatim, and that is exactly
//! what ends up in the output cells.

use std::io::Read;

use crate::{Error, Result};

use super::source::CharSource;
use super::token::TokenKind;

pub struct Lexer<R> {
    source: CharSource<R>,
    /// Reused lexeme storage for the current token.
    buf: Vec<u8>,
    peeked: Option<TokenKind>,
}

impl<R: Read> Lexer<R> {
    pub fn new(input: R) -> Self {
        Self {
            source: CharSource::new(input),
            buf: Vec::new(),
            peeked: None,
        }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Result<TokenKind> {
        if let Some(kind) = self.peeked.take() {
            return Ok(kind);
        }
        self.read_token()
    }

    /// Returns the upcoming token without consuming it.
    pub fn peek_token(&mut self) -> Result<TokenKind> {
        if let Some(kind) = self.peeked {
            return Ok(kind);
        }
        let kind = self.read_token()?;
        self.peeked = Some(kind);
        Ok(kind)
    }

    /// Lexeme of the most recently read token: the keyword text, the number
    /// digits, or the string contents without the surrounding quotes.
    pub fn text(&self) -> &[u8] {
        &self.buf
    }

    fn read_token(&mut self) -> Result<TokenKind> {
        self.buf.clear();

        let byte = loop {
            match self.source.read()? {
                Some(b' ' | b'\t' | b'\n' | b'\r') => continue,
                Some(byte) => break byte,
                None => return Ok(TokenKind::Eof),
            }
        };

        let kind = match byte {
            b'{' => TokenKind::BeginObject,
            b'}' => TokenKind::EndObject,
            b':' => TokenKind::PairSep,
            b',' => TokenKind::MemberSep,
            b'[' => TokenKind::BeginArray,
            b']' => TokenKind::EndArray,
            b't' => return self.keyword("true", TokenKind::Bool),
            b'f' => return self.keyword("false", TokenKind::Bool),
            b'n' => return self.keyword("null", TokenKind::Null),
            b'"' => return self.string(),
            b'-' => {
                self.buf.push(byte);
                return self.after_minus();
            }
            b'0' => {
                self.buf.push(byte);
                return self.after_zero();
            }
            b'1'..=b'9' => {
                self.buf.push(byte);
                return self.after_onenine();
            }
            other => return Err(Error::UnexpectedChar(other)),
        };

        self.buf.push(byte);
        Ok(kind)
    }

    /// The first byte is already matched; the rest of `word` must follow
    /// exactly.
    fn keyword(&mut self, word: &'static str, kind: TokenKind) -> Result<TokenKind> {
        for &expected in &word.as_bytes()[1..] {
            if self.source.read()? != Some(expected) {
                return Err(Error::KeywordMismatch(word));
            }
        }
        self.buf.extend_from_slice(word.as_bytes());
        Ok(kind)
    }

    fn string(&mut self) -> Result<TokenKind> {
        loop {
            match self.source.read()? {
                None => return Err(Error::UnterminatedString),
                Some(b'"') => return Ok(TokenKind::Str),
                Some(b'\\') => {
                    self.buf.push(b'\\');
                    self.escape()?;
                }
                // The delete character 0x7f is allowed.
                Some(byte) if byte <= 0x1f => return Err(Error::ControlChar),
                Some(byte) => self.buf.push(byte),
            }
        }
    }

    fn escape(&mut self) -> Result<()> {
        match self.source.read()? {
            None => Err(Error::UnterminatedString),
            Some(byte @ (b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')) => {
                self.buf.push(byte);
                Ok(())
            }
            Some(b'u') => {
                self.buf.push(b'u');
                for _ in 0..4 {
                    match self.source.read()? {
                        Some(byte) if byte.is_ascii_hexdigit() => self.buf.push(byte),
                        Some(byte) => return Err(Error::BadHexDigit(byte)),
                        None => return Err(Error::UnterminatedString),
                    }
                }
                Ok(())
            }
            Some(byte) => Err(Error::BadEscape(byte)),
        }
    }

    fn after_minus(&mut self) -> Result<TokenKind> {
        match self.source.read()? {
            Some(byte @ b'0') => {
                self.buf.push(byte);
                self.after_zero()
            }
            Some(byte @ b'1'..=b'9') => {
                self.buf.push(byte);
                self.after_onenine()
            }
            _ => Err(Error::NoDigitAfterMinus),
        }
    }

    /// A leading zero stands alone: only a fraction or an exponent may
    /// follow it.
    fn after_zero(&mut self) -> Result<TokenKind> {
        match self.source.read()? {
            Some(b'.') => {
                self.buf.push(b'.');
                self.fraction()
            }
            Some(byte @ (b'e' | b'E')) => {
                self.buf.push(byte);
                self.exponent()
            }
            Some(byte) => {
                self.source.unread(byte);
                Ok(TokenKind::Number)
            }
            None => Ok(TokenKind::Number),
        }
    }

    fn after_onenine(&mut self) -> Result<TokenKind> {
        loop {
            match self.source.read()? {
                Some(byte @ b'0'..=b'9') => self.buf.push(byte),
                Some(b'.') => {
                    self.buf.push(b'.');
                    return self.fraction();
                }
                Some(byte @ (b'e' | b'E')) => {
                    self.buf.push(byte);
                    return self.exponent();
                }
                Some(byte) => {
                    self.source.unread(byte);
                    return Ok(TokenKind::Number);
                }
                None => return Ok(TokenKind::Number),
            }
        }
    }

    fn fraction(&mut self) -> Result<TokenKind> {
        if self.digits()? == 0 {
            return Err(Error::NoFractionDigits);
        }
        match self.source.read()? {
            Some(byte @ (b'e' | b'E')) => {
                self.buf.push(byte);
                self.exponent()
            }
            Some(byte) => {
                self.source.unread(byte);
                Ok(TokenKind::Number)
            }
            None => Ok(TokenKind::Number),
        }
    }

    /// End of stream directly after `e`/`E` or a sign is an error; after at
    /// least one exponent digit the number may end with the stream.
    fn exponent(&mut self) -> Result<TokenKind> {
        match self.source.read()? {
            Some(byte @ (b'+' | b'-')) => {
                self.buf.push(byte);
                if self.digits()? == 0 {
                    return Err(Error::NoExponentDigits);
                }
            }
            Some(byte @ b'0'..=b'9') => {
                self.buf.push(byte);
                self.digits()?;
            }
            _ => return Err(Error::NoExponentDigits),
        }
        Ok(TokenKind::Number)
    }

    /// Consumes a run of digits, pushing back the byte that ends it.
    fn digits(&mut self) -> Result<usize> {
        let mut count = 0;
        loop {
            match self.source.read()? {
                Some(byte @ b'0'..=b'9') => {
                    self.buf.push(byte);
                    count += 1;
                }
                Some(byte) => {
                    self.source.unread(byte);
                    return Ok(count);
                }
                None => return Ok(count),
            }
        }
    }
}
