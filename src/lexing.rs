//! Line-oriented lexing
//!
//!     The tokenizer works one line at a time. Whatever it needs to remember between lines is
//!     kept in a [LineState] that the host threads from each line's exit into the next line's
//!     entry. Everything else is immutable: the rule tables are built once per process.
//!
//!     Modules:
//!         - [state]: lexical modes and the line state wrapper.
//!         - [token]: token categories, their codes and labels.
//!         - [rules]: the ordered rule list of every handled state.
//!         - [tokenizer]: the dispatch loop and its result type.

pub mod rules;
pub mod state;
pub mod token;
pub mod tokenizer;

pub use state::{is_line_state_equal, LineState, State, INITIAL_LINE_STATE};
pub use token::{Token, TokenType, TOKEN_NAMES};
pub use tokenizer::{tokenize_line, LineTokens, Spans, TokenizeError, HAS_ARRAY_RETURN};
