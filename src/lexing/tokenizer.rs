//! Line tokenizer
//!
//!     `tokenize_line` is a pure function from a line and its entry state to the line's tokens
//!     and the state to carry into the next line. It owns nothing beyond its return value, so it
//!     can be called from any number of threads at once.
//!
//!     Dispatch loop:
//!         1. Look up the ordered rule list of the current state.
//!         2. Apply the first rule that matches the rest of the line.
//!         3. Emit `(kind, len)`, advance, move to the rule's next state.
//!         4. Repeat until the whole line is consumed.
//!
//!     A failure anywhere aborts the line: the caller gets an error and no tokens.

use super::rules::rules_for;
use super::state::{LineState, State};
use super::token::{Token, TokenType};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Tokens are handed to hosts as a flat `code, len, code, len, ...` array
/// (see [LineTokens::to_flat]).
pub const HAS_ARRAY_RETURN: bool = true;

/// Result of tokenizing one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    /// State to carry into the next line.
    pub state: LineState,
    pub tokens: Vec<Token>,
}

impl LineTokens {
    /// Alternating category codes and lengths.
    pub fn to_flat(&self) -> Vec<u32> {
        self.tokens
            .iter()
            .flat_map(|token| [token.kind.code(), token.len as u32])
            .collect()
    }

    /// Sum of token lengths, in chars.
    pub fn total_len(&self) -> usize {
        self.tokens.iter().map(|token| token.len).sum()
    }

    /// Pair each token with its slice of `line`, which must be the line that was tokenized.
    pub fn spans<'a>(&'a self, line: &'a str) -> Spans<'a> {
        Spans {
            rest: line,
            tokens: self.tokens.iter(),
        }
    }
}

/// Iterator over `(kind, text)` pairs, see [LineTokens::spans].
pub struct Spans<'a> {
    rest: &'a str,
    tokens: std::slice::Iter<'a, Token>,
}

impl<'a> Iterator for Spans<'a> {
    type Item = (TokenType, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        let end = self
            .rest
            .char_indices()
            .nth(token.len)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some((token.kind, text))
    }
}

/// Fatal tokenizer failures. Both point at a gap in the transition table rather than at bad
/// input, and neither comes with partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// No rule of `state` matched the rest of the line starting at char `offset`.
    UnmatchedInput { state: State, offset: usize },
    /// Dispatch reached a state that has no rules.
    UnhandledState(State),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::UnmatchedInput { state, offset } => {
                write!(f, "No rule matched in state {} at offset {}", state, offset)
            }
            TokenizeError::UnhandledState(state) => {
                write!(f, "No rules defined for state {}", state)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenize a single line, starting in `line_state`.
pub fn tokenize_line(line: &str, line_state: LineState) -> Result<LineTokens, TokenizeError> {
    let mut state = line_state.state;
    let mut tokens = Vec::new();
    // `index` walks bytes for slicing, `offset` counts chars for reporting.
    let mut index = 0;
    let mut offset = 0;

    while index < line.len() {
        let rest = &line[index..];
        let rules = rules_for(state).ok_or(TokenizeError::UnhandledState(state))?;
        let (rule, matched) = rules
            .iter()
            .find_map(|rule| rule.apply(rest).map(|matched| (rule, matched)))
            .ok_or(TokenizeError::UnmatchedInput { state, offset })?;

        trace!(
            rule = rule.name,
            kind = %matched.kind,
            len = matched.chars,
            offset,
            "token"
        );
        tokens.push(Token::new(matched.kind, matched.chars));
        index += matched.bytes;
        offset += matched.chars;
        state = rule.next;
    }

    // A `//` at the very end leaves the comment state open; comments stop at the line end.
    if state == State::InsideLineComment && !tokens.is_empty() {
        state = State::TopLevelContent;
    }

    debug!(entry = %line_state.state, exit = %state, tokens = tokens.len(), "tokenized line");

    Ok(LineTokens {
        state: LineState::new(state),
        tokens,
    })
}
