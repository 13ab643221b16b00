//! # linelex
//!
//! A line-oriented, stateful tokenizer for syntax highlighting.
//!
//! Each call classifies one line into `(category, length)` tokens and returns the state to
//! carry into the next line, so hosts can re-tokenize incrementally after an edit:
//!
//! ```rust,ignore
//! use linelex::{tokenize_line, INITIAL_LINE_STATE};
//!
//! let mut state = INITIAL_LINE_STATE;
//! for line in source.lines() {
//!     let result = tokenize_line(line, state)?;
//!     state = result.state;
//! }
//! ```
//!
//! The [config] module holds the layered settings used by the `linelex` binary.

pub mod config;
pub mod lexing;

pub use lexing::{
    is_line_state_equal, tokenize_line, LineState, LineTokens, State, Token, TokenType,
    TokenizeError, HAS_ARRAY_RETURN, INITIAL_LINE_STATE, TOKEN_NAMES,
};
