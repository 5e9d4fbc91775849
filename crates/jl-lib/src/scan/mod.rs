//! Pull scanning of document streams.
//!
//! [`CharSource`] turns an `io::Read` into a byte-at-a-time source with one
//! pushback slot; [`Lexer`] turns that into tokens with one token of
//! lookahead. Lexemes are preserved as read — no unescaping, no numeric
//! conversion — because the extractor's output is the input's bytes.

mod lexer;
mod source;
mod token;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod source_tests;

pub use lexer::Lexer;
pub use source::CharSource;
pub use token::TokenKind;
