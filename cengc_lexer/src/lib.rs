//! Single-pass scanner for the CENG source language.
//!
//! One forward pass over the input bytes produces the full token list or the
//! first lexical fault. All recognizers (identifiers, numbers, strings,
//! comments, operators) share the same cursor and line counter; there is no
//! separate comment-stripping or literal-parsing phase.

pub mod cursor;

use cengc_token::keywords::check_keyword;
use cengc_token::{LexError, LexErrorKind, Token, TokenKind};
use cursor::Cursor;

pub const MAX_IDENTIFIER_LENGTH: usize = 25;
pub const MAX_INT_LENGTH: usize = 10;

/// Scans `input` left to right and returns the tokens in source order.
///
/// Whitespace, comments and bytes outside the language's alphabet produce no
/// tokens. The first malformed lexeme aborts the scan; no partial token list
/// accompanies the error. Each call is independent — no state survives it.
pub fn scan(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    while !scanner.cursor.is_eof() {
        if let Some(token) = scanner.next_token()? {
            tokens.push(token);
        }
    }
    Ok(tokens)
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

struct Scanner<'a> {
    src: &'a str,
    cursor: Cursor<'a>,
    /// 1-based; incremented on every raw newline consumed, including those
    /// inside strings and block comments.
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            cursor: Cursor::new(src.as_bytes()),
            line: 1,
        }
    }

    /// Consumes one lexeme and returns its token, or `None` for lexemes that
    /// produce no token (whitespace, newlines, comments, stray bytes).
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let first_byte = match self.cursor.bump() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match first_byte {
            b';' => Some(Token::new(TokenKind::StatementEnd)),
            b'+' => Some(self.plus()),
            b'-' => Some(self.minus()?),
            b'*' => Some(Token::with_text(TokenKind::Operator, "*")),
            b'/' => self.slash()?,
            b'=' => Some(self.one_or_two_char_op("=", "==")),
            b'<' => Some(self.one_or_two_char_op("<", "<=")),
            b'>' => Some(self.one_or_two_char_op(">", ">=")),
            b'(' => Some(Token::with_text(TokenKind::LeftParen, "(")),
            b')' => Some(Token::with_text(TokenKind::RightParen, ")")),
            b'{' => Some(Token::with_text(TokenKind::LeftBrace, "{")),
            b'}' => Some(Token::with_text(TokenKind::RightBrace, "}")),
            b'"' => Some(self.string()?),
            c if is_ident_start(c) => Some(self.ident()?),
            c if c.is_ascii_digit() => Some(self.number()?),
            b'\n' => {
                self.line += 1;
                None
            }
            // Spaces, tabs and any other byte are skipped without a token.
            _ => None,
        };
        Ok(token)
    }

    fn plus(&mut self) -> Token {
        if self.cursor.first() == b'+' {
            self.cursor.bump();
            Token::with_text(TokenKind::Operator, "++")
        } else {
            Token::with_text(TokenKind::Operator, "+")
        }
    }

    /// `--`, a negative integer constant, or the bare `-` operator. The sign
    /// is absorbed into a number only when a digit is immediately adjacent;
    /// `- 5` stays two lexemes.
    fn minus(&mut self) -> Result<Token, LexError> {
        if self.cursor.first() == b'-' {
            self.cursor.bump();
            return Ok(Token::with_text(TokenKind::Operator, "--"));
        }
        if self.cursor.first().is_ascii_digit() {
            let start = self.cursor.pos();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            let digits = &self.src[start..self.cursor.pos()];
            if digits.len() > MAX_INT_LENGTH {
                return Err(LexError::new(
                    LexErrorKind::NegativeIntConstantTooLong,
                    self.line,
                ));
            }
            return Ok(Token::with_text(TokenKind::IntConstant, format!("-{digits}")));
        }
        Ok(Token::with_text(TokenKind::Operator, "-"))
    }

    /// `=`/`==`, `<`/`<=`, `>`/`>=` share one shape: a trailing `=` widens
    /// the operator.
    fn one_or_two_char_op(&mut self, single: &str, double: &str) -> Token {
        if self.cursor.first() == b'=' {
            self.cursor.bump();
            Token::with_text(TokenKind::Operator, double)
        } else {
            Token::with_text(TokenKind::Operator, single)
        }
    }

    fn slash(&mut self) -> Result<Option<Token>, LexError> {
        match self.cursor.first() {
            b'*' => {
                self.cursor.bump();
                self.block_comment()?;
                Ok(None)
            }
            b'/' => {
                self.cursor.bump();
                self.line_comment();
                Ok(None)
            }
            _ => Ok(Some(Token::with_text(TokenKind::Operator, "/"))),
        }
    }

    fn block_comment(&mut self) -> Result<(), LexError> {
        loop {
            if self.cursor.first() == b'*' && self.cursor.second() == b'/' {
                self.cursor.bump();
                self.cursor.bump();
                return Ok(());
            }
            match self.cursor.bump() {
                Some(b'\n') => self.line += 1,
                Some(_) => {}
                None => {
                    return Err(LexError::new(LexErrorKind::UnterminatedComment, self.line))
                }
            }
        }
    }

    /// Skips to (not past) the terminating newline and counts one line. The
    /// newline byte itself is left for the dispatch loop, which counts it a
    /// second time; that double count is the scanner's historical observable
    /// behavior and is kept.
    fn line_comment(&mut self) {
        self.cursor.eat_while(|c| c != b'\n');
        self.line += 1;
    }

    fn ident(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos() - 1;
        self.cursor.eat_while(is_ident_continue);
        let text = &self.src[start..self.cursor.pos()];
        if text.len() > MAX_IDENTIFIER_LENGTH {
            return Err(LexError::new(LexErrorKind::IdentifierTooLong, self.line));
        }
        if check_keyword(text).is_some() {
            Ok(Token::with_text(TokenKind::Keyword, text))
        } else {
            Ok(Token::with_text(TokenKind::Identifier, text))
        }
    }

    fn number(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos() - 1;
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let text = &self.src[start..self.cursor.pos()];
        if text.len() > MAX_INT_LENGTH {
            return Err(LexError::new(LexErrorKind::IntConstantTooLong, self.line));
        }
        Ok(Token::with_text(TokenKind::IntConstant, text))
    }

    /// The opening quote is already consumed. The payload is everything
    /// strictly between the quotes; embedded newlines are legal and counted.
    fn string(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        loop {
            match self.cursor.bump() {
                Some(b'"') => {
                    let text = &self.src[start..self.cursor.pos() - 1];
                    return Ok(Token::with_text(TokenKind::StringConstant, text));
                }
                Some(b'\n') => self.line += 1,
                Some(_) => {}
                None => {
                    return Err(LexError::new(LexErrorKind::UnterminatedString, self.line))
                }
            }
        }
    }
}
