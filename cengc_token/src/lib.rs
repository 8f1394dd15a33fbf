use std::fmt::Display;

pub mod error;
pub mod keywords;

pub use error::{LexError, LexErrorKind};

/// The closed set of token classes the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    StringConstant,
    IntConstant,
    Keyword,
    Operator,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    StatementEnd,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::StringConstant => "StringConstant",
            TokenKind::IntConstant => "IntConstant",
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::StatementEnd => "StatementEnd",
        };
        write!(f, "{val}")
    }
}

/// One classified lexeme. `text` is the exact source text of the lexeme;
/// statement terminators carry no payload. Tokens hold no position data —
/// line numbers exist only on scan-time errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, text: None }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
        }
    }
}

impl Display for Token {
    /// Renders the token dump line format: `Token{Type: <Kind>}`, with a
    /// `, Value: <text>` field when the payload is non-empty. An empty
    /// payload (e.g. the string constant `""`) renders without a Value
    /// field, matching the historical dump output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token{{Type: {}", self.kind)?;
        if let Some(text) = &self.text {
            if !text.is_empty() {
                write!(f, ", Value: {text}")?;
            }
        }
        write!(f, "}}")
    }
}
