use std::fmt::Display;

use phf::phf_map;

/// The 17 reserved words of the language. Identifier-shaped lexemes that
/// match this set are emitted as keyword tokens, never as identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kw {
    Break,
    Case,
    Char,
    Const,
    Do,
    Else,
    Enum,
    Float,
    For,
    If,
    Int,
    Double,
    Long,
    Struct,
    Return,
    Static,
    While,
}

impl Display for Kw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            Kw::Break => "break",
            Kw::Case => "case",
            Kw::Char => "char",
            Kw::Const => "const",
            Kw::Do => "do",
            Kw::Else => "else",
            Kw::Enum => "enum",
            Kw::Float => "float",
            Kw::For => "for",
            Kw::If => "if",
            Kw::Int => "int",
            Kw::Double => "double",
            Kw::Long => "long",
            Kw::Struct => "struct",
            Kw::Return => "return",
            Kw::Static => "static",
            Kw::While => "while",
        };
        write!(f, "{val}")
    }
}

pub const KEYWORD: phf::Map<&'static str, Kw> = phf_map! {
    "break" => Kw::Break,
    "case" => Kw::Case,
    "char" => Kw::Char,
    "const" => Kw::Const,
    "do" => Kw::Do,
    "else" => Kw::Else,
    "enum" => Kw::Enum,
    "float" => Kw::Float,
    "for" => Kw::For,
    "if" => Kw::If,
    "int" => Kw::Int,
    "double" => Kw::Double,
    "long" => Kw::Long,
    "struct" => Kw::Struct,
    "return" => Kw::Return,
    "static" => Kw::Static,
    "while" => Kw::While,
};

pub fn check_keyword(arg: &str) -> Option<Kw> {
    KEYWORD.get(arg).cloned()
}
