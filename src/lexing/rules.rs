//! Ordered rule tables, one per lexical state
//!
//!     Each handled state owns a list of rules. The tokenizer tries them in declaration order
//!     against the unconsumed rest of the line and the first one that matches wins. Order is the
//!     whole disambiguation strategy: keywords must come before identifiers, the `//` opener
//!     before single char punctuation, and so on. Nothing relies on regex alternation
//!     precedence between rules.
//!
//!     Every pattern is anchored at the start of the rest and requires at least one char, which
//!     is what guarantees forward progress.
//!
//!     Top level, in priority order:
//!         whitespace, keyword, identifier, numeric, `//`, punctuation, `"`, backtick, text
//!
//!     Inside a double quoted string:
//!         `"`, content run, escape, lone backslash
//!
//!     Inside a line comment:
//!         the rest of the line

use super::state::State;
use super::token::TokenType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved words recognized at top level. Matched only as whole words.
pub const KEYWORDS: &[&str] = &[
    "var",
    "type",
    "true",
    "switch",
    "struct",
    "select",
    "return",
    "range",
    "package",
    "map",
    "interface",
    "import",
    "if",
    "goto",
    "go",
    "for",
    "func",
    "false",
    "default",
    "continue",
    "const",
    "chan",
    "case",
    "break",
    "nil",
    "else",
    "string",
    "int64",
    "bool",
];

/// Words that classify as [TokenType::LanguageConstant] instead of [TokenType::Keyword].
pub const LANGUAGE_CONSTANTS: &[&str] = &["true", "false", "null"];

const WHITESPACE: &str = r"^\s+";
/// Leading run of ASCII word chars; a keyword only counts if it is the whole run.
const WORD: &str = r"^[A-Za-z0-9_]+";
const IDENTIFIER: &str = r"^[a-zA-Z_][a-zA-Z_0-9]*";
const NUMERIC: &str = r"^(?:0[xX][0-9a-fA-F]*|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)";
const LINE_COMMENT: &str = r"^//";
const PUNCTUATION: &str = r"^[()=+\-><.,/*^\[\]{}|:;%!&]";
const QUOTE_DOUBLE: &str = r#"^""#;
const QUOTE_BACKTICK: &str = r"^`";
const ANYTHING_UNTIL_END: &str = r"(?s)^.+";
const STRING_DOUBLE_QUOTE_CONTENT: &str = r#"^[^"\\]+"#;
const STRING_ESCAPE: &str = r"^\\.";
const BACKSLASH: &str = r"^\\";

/// How a rule recognizes its token.
#[derive(Debug)]
enum Matcher {
    /// An anchored regex.
    Pattern(Regex),
    /// The leading word, if it is one of [KEYWORDS].
    Keyword(Regex),
}

/// One entry of a state's rule list.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    matcher: Matcher,
    kind: TokenType,
    pub next: State,
}

/// What a rule consumed and how it classified it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Byte length of the consumed prefix.
    pub bytes: usize,
    /// Char length of the consumed prefix.
    pub chars: usize,
    pub kind: TokenType,
}

impl Rule {
    fn pattern(name: &'static str, pattern: &str, kind: TokenType, next: State) -> Self {
        Self {
            name,
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
            kind,
            next,
        }
    }

    fn keyword(next: State) -> Self {
        Self {
            name: "keyword",
            matcher: Matcher::Keyword(Regex::new(WORD).unwrap()),
            kind: TokenType::Keyword,
            next,
        }
    }

    /// Try the rule against the unconsumed rest of a line.
    pub fn apply(&self, rest: &str) -> Option<RuleMatch> {
        let (text, kind) = match &self.matcher {
            Matcher::Pattern(regex) => (regex.find(rest)?.as_str(), self.kind),
            Matcher::Keyword(regex) => {
                let word = regex.find(rest)?.as_str();
                if !KEYWORDS.contains(&word) {
                    return None;
                }
                (word, classify_keyword(word))
            }
        };
        if text.is_empty() {
            return None;
        }
        Some(RuleMatch {
            bytes: text.len(),
            chars: text.chars().count(),
            kind,
        })
    }
}

fn classify_keyword(word: &str) -> TokenType {
    if LANGUAGE_CONSTANTS.contains(&word) {
        TokenType::LanguageConstant
    } else {
        TokenType::Keyword
    }
}

static TOP_LEVEL_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use State::*;
    vec![
        Rule::pattern("whitespace", WHITESPACE, TokenType::Whitespace, TopLevelContent),
        Rule::keyword(TopLevelContent),
        Rule::pattern("identifier", IDENTIFIER, TokenType::VariableName, TopLevelContent),
        Rule::pattern("numeric", NUMERIC, TokenType::Numeric, TopLevelContent),
        Rule::pattern("line_comment", LINE_COMMENT, TokenType::Comment, InsideLineComment),
        Rule::pattern("punctuation", PUNCTUATION, TokenType::Punctuation, TopLevelContent),
        Rule::pattern("quote_double", QUOTE_DOUBLE, TokenType::Punctuation, InsideDoubleQuoteString),
        Rule::pattern("quote_backtick", QUOTE_BACKTICK, TokenType::String, InsideBacktickString),
        Rule::pattern("text", ANYTHING_UNTIL_END, TokenType::Text, TopLevelContent),
    ]
});

static DOUBLE_QUOTE_STRING_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use State::*;
    vec![
        Rule::pattern("quote_double", QUOTE_DOUBLE, TokenType::Punctuation, TopLevelContent),
        Rule::pattern(
            "string_content",
            STRING_DOUBLE_QUOTE_CONTENT,
            TokenType::String,
            InsideDoubleQuoteString,
        ),
        Rule::pattern("string_escape", STRING_ESCAPE, TokenType::String, InsideDoubleQuoteString),
        Rule::pattern("backslash", BACKSLASH, TokenType::String, InsideDoubleQuoteString),
    ]
});

static LINE_COMMENT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![Rule::pattern(
        "comment_content",
        ANYTHING_UNTIL_END,
        TokenType::Comment,
        State::TopLevelContent,
    )]
});

/// The ordered rule list for a state, or `None` when the state has no handler.
pub fn rules_for(state: State) -> Option<&'static [Rule]> {
    match state {
        State::TopLevelContent => Some(TOP_LEVEL_RULES.as_slice()),
        State::InsideDoubleQuoteString => Some(DOUBLE_QUOTE_STRING_RULES.as_slice()),
        State::InsideLineComment => Some(LINE_COMMENT_RULES.as_slice()),
        State::InsideBacktickString | State::AfterKeywordFunc => None,
    }
}
