use thiserror::Error;

/// The fault categories the scanner can report. Each variant's message is
/// part of the external error contract and must not be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("identifier too long")]
    IdentifierTooLong,

    #[error("int constant too long")]
    IntConstantTooLong,

    #[error("negative int constant too long")]
    NegativeIntConstantTooLong,

    #[error("string constant not terminated")]
    UnterminatedString,

    #[error("multiline comment not terminated")]
    UnterminatedComment,
}

/// A fatal lexical fault: the first malformed lexeme aborts the scan, so an
/// error is never paired with a partial token list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexical error: {kind} [line: {line}]")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based source line at which the fault was detected.
    pub line: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

#[cfg(test)]
mod test {
    use super::{LexError, LexErrorKind};

    #[test]
    fn rendered_form_matches_contract() {
        let err = LexError::new(LexErrorKind::IdentifierTooLong, 1);
        assert_eq!(err.to_string(), "lexical error: identifier too long [line: 1]");

        let err = LexError::new(LexErrorKind::UnterminatedComment, 42);
        assert_eq!(
            err.to_string(),
            "lexical error: multiline comment not terminated [line: 42]"
        );
    }

    #[test]
    fn kind_messages() {
        assert_eq!(LexErrorKind::IntConstantTooLong.to_string(), "int constant too long");
        assert_eq!(
            LexErrorKind::NegativeIntConstantTooLong.to_string(),
            "negative int constant too long"
        );
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "string constant not terminated"
        );
    }
}
