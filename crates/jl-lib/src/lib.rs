//! Streaming extraction of JSON values into delimited rows.
//!
//! A pattern such as `{name,tags[*]}` compiles into a small operator tree
//! (`Array`, `Object`, `Collect`). The runtime drives a pull lexer over each
//! top-level value in the input, collects matched scalars into tables, and
//! emits the Cartesian product of the accumulated rows whenever the
//! pattern's root operator finishes one value.
//!
//! # Example
//!
//! ```
//! use jl_lib::{Pattern, Runtime};
//!
//! let pattern = Pattern::compile("{name,tags[*]}").expect("valid pattern");
//! let mut runtime = Runtime::new(&pattern, "\t", Vec::new());
//! runtime
//!     .process(r#"{"name":"x","tags":["p","q"]}"#.as_bytes())
//!     .expect("valid input");
//!
//! let out = String::from_utf8(runtime.into_output()).unwrap();
//! assert_eq!(out, "x\tp\nx\tq\n");
//! ```
//!
//! Scalars are emitted as the literal bytes read from the input: numbers
//! keep their lexical form and string escapes pass through unprocessed.

pub mod diagnostics;
pub mod engine;
pub mod pattern;
pub mod scan;
pub mod table;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
mod table_tests;

pub use diagnostics::PatternErrorPrinter;
pub use engine::Runtime;
pub use pattern::{Pattern, PatternError};
pub use scan::{CharSource, Lexer, TokenKind};
pub use table::{Table, TableSet};

/// Errors that can occur while scanning and extracting a document stream.
///
/// All of them are fatal; the extractor performs no recovery. A document
/// whose *shape* disagrees with the pattern is not an error — it is skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected character: {:?}", byte_char(.0))]
    UnexpectedChar(u8),

    #[error("error matching literal: {0}")]
    KeywordMismatch(&'static str),

    #[error("non-terminated string")]
    UnterminatedString,

    #[error("control character in string")]
    ControlChar,

    #[error("invalid escape character: {:?}", byte_char(.0))]
    BadEscape(u8),

    #[error("not a hex character: {:?}", byte_char(.0))]
    BadHexDigit(u8),

    #[error("no digit following minus sign")]
    NoDigitAfterMinus,

    #[error("no digits after fraction")]
    NoFractionDigits,

    #[error("no exponent digits")]
    NoExponentDigits,

    #[error("unexpected token: {0}")]
    UnexpectedToken(TokenKind),

    #[error("expected array end")]
    ExpectedArrayEnd,

    #[error("expected object end")]
    ExpectedObjectEnd,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

fn byte_char(byte: &u8) -> char {
    char::from(*byte)
}
