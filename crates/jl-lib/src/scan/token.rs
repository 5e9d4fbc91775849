//! Token kinds of the document grammar.

/// What the lexer produced. The lexeme itself stays in the lexer's reusable
/// buffer and is read through [`Lexer::text`](super::Lexer::text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BeginObject,
    EndObject,
    PairSep,
    MemberSep,
    BeginArray,
    EndArray,
    Str,
    Number,
    Bool,
    Null,
    Eof,
}

impl TokenKind {
    /// Literal tokens are the ones a `Collect` operator can capture.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Str | TokenKind::Number | TokenKind::Bool | TokenKind::Null
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::BeginObject => "'{'",
            TokenKind::EndObject => "'}'",
            TokenKind::PairSep => "':'",
            TokenKind::MemberSep => "','",
            TokenKind::BeginArray => "'['",
            TokenKind::EndArray => "']'",
            TokenKind::Str => "string",
            TokenKind::Number => "number",
            TokenKind::Bool => "boolean",
            TokenKind::Null => "null",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}
