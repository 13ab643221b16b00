//! Token categories and token records
//!
//!     A token is a category plus the number of chars it covers. Tokens never own text: a
//!     consumer walks the line with a running offset to recover each token's slice (see
//!     [LineTokens::spans](crate::lexing::tokenizer::LineTokens::spans)).
//!
//!     Categories carry stable numeric codes so they can cross into hosts that only see the
//!     flat `code, len, code, len, ...` array. Several categories are reserved for a larger
//!     grammar and are never produced by the current transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum TokenType {
    Whitespace = 0,
    Punctuation = 10,
    PunctuationString = 11,
    Numeric = 30,
    TypeName = 35,
    TypePrimitive = 36,
    String = 50,
    Comment = 60,
    FunctionName = 112,
    Text = 117,
    TagName = 118,
    AttributeName = 119,
    Error = 141,
    PunctuationTag = 228,
    NewLine = 771,
    None = 901,
    Keyword = 951,
    VariableName = 952,
    LanguageConstant = 953,
    KeywordControl = 954,
    KeywordImport = 955,
    KeywordReturn = 956,
}

/// Display labels, indexed by category.
pub const TOKEN_NAMES: &[(TokenType, &str)] = &[
    (TokenType::Whitespace, "Whitespace"),
    (TokenType::Punctuation, "Punctuation"),
    (TokenType::PunctuationString, "PunctuationString"),
    (TokenType::Numeric, "Numeric"),
    (TokenType::TypeName, "TypeName"),
    (TokenType::TypePrimitive, "TypePrimitive"),
    (TokenType::String, "String"),
    (TokenType::Comment, "Comment"),
    (TokenType::FunctionName, "Function"),
    (TokenType::Text, "Text"),
    (TokenType::TagName, "TagName"),
    (TokenType::AttributeName, "AttributeName"),
    (TokenType::Error, "Error"),
    (TokenType::PunctuationTag, "PunctuationTag"),
    (TokenType::NewLine, "NewLine"),
    (TokenType::None, "None"),
    (TokenType::Keyword, "Keyword"),
    (TokenType::VariableName, "VariableName"),
    (TokenType::LanguageConstant, "LanguageConstant"),
    (TokenType::KeywordControl, "KeywordControl"),
    (TokenType::KeywordImport, "KeywordImport"),
    (TokenType::KeywordReturn, "KeywordReturn"),
];

impl TokenType {
    /// Stable numeric code used in the flat token array.
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<TokenType> {
        TOKEN_NAMES
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| kind.code() == code)
    }

    /// Human readable label for hosts that map categories to style rules.
    pub fn name(self) -> &'static str {
        TOKEN_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of a line: its category and how many chars it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenType,
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenType, len: usize) -> Self {
        Self { kind, len }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.len)
    }
}
