//! Line states carried across line boundaries
//!
//!     A line state is the only thing the tokenizer remembers between two lines. It names the
//!     lexical mode that is open when a line ends, so that constructs such as double quoted
//!     strings can continue on the next line.
//!
//!     Hosts keep one line state per line boundary. After an edit they re-tokenize downwards
//!     until a recomputed exit state equals the cached one, see [is_line_state_equal].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lexical mode active at a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum State {
    #[default]
    TopLevelContent,
    InsideDoubleQuoteString,
    InsideLineComment,
    /// Entered after a backtick. No transitions are defined for it yet.
    InsideBacktickString,
    /// Reserved. Nothing transitions into it.
    AfterKeywordFunc,
}

impl State {
    /// Every declared state, in code order.
    pub const ALL: &'static [State] = &[
        State::TopLevelContent,
        State::InsideDoubleQuoteString,
        State::InsideLineComment,
        State::InsideBacktickString,
        State::AfterKeywordFunc,
    ];

    /// Stable numeric code, for hosts that persist states outside of Rust.
    pub fn code(self) -> u32 {
        match self {
            State::TopLevelContent => 1,
            State::InsideDoubleQuoteString => 2,
            State::InsideLineComment => 3,
            State::InsideBacktickString => 4,
            State::AfterKeywordFunc => 5,
        }
    }

    pub fn from_code(code: u32) -> Option<State> {
        State::ALL.iter().copied().find(|state| state.code() == code)
    }

    /// Whether the tokenizer has rules for this state.
    pub fn is_handled(self) -> bool {
        matches!(
            self,
            State::TopLevelContent | State::InsideDoubleQuoteString | State::InsideLineComment
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::TopLevelContent => "TopLevelContent",
            State::InsideDoubleQuoteString => "InsideDoubleQuoteString",
            State::InsideLineComment => "InsideLineComment",
            State::InsideBacktickString => "InsideBacktickString",
            State::AfterKeywordFunc => "AfterKeywordFunc",
        };
        f.write_str(name)
    }
}

/// State carried from the end of one line to the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LineState {
    pub state: State,
}

impl LineState {
    pub const fn new(state: State) -> Self {
        Self { state }
    }
}

/// The state to use for the first line of any document.
pub const INITIAL_LINE_STATE: LineState = LineState::new(State::TopLevelContent);

/// Whether two line states are interchangeable at a line boundary.
///
/// This is the signal an incremental re-lex driver uses to stop propagating an edit.
pub fn is_line_state_equal(a: &LineState, b: &LineState) -> bool {
    a.state == b.state
}
