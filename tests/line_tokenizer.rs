//! Integration tests for the line tokenizer
//!
//! Each test feeds lines through the public API exactly as a highlighting host would, threading
//! the exit state of one line into the next.

use linelex::{
    is_line_state_equal, tokenize_line, LineState, LineTokens, State, TokenType, TokenizeError,
    INITIAL_LINE_STATE,
};
use rstest::rstest;

/// Helper: strip tokens down to `(kind, len)` pairs
fn pairs(result: &LineTokens) -> Vec<(TokenType, usize)> {
    result.tokens.iter().map(|t| (t.kind, t.len)).collect()
}

/// Helper: tokenize a document top to bottom, collecting every line's result
fn tokenize_lines(lines: &[&str]) -> Vec<LineTokens> {
    let mut state = INITIAL_LINE_STATE;
    lines
        .iter()
        .map(|line| {
            let result = tokenize_line(line, state).expect("line to tokenize");
            state = result.state;
            result
        })
        .collect()
}

fn render(results: &[LineTokens]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let tokens: Vec<String> = result.tokens.iter().map(|t| t.to_string()).collect();
            format!(
                "{}: {} -> {}",
                index + 1,
                tokens.join(" "),
                result.state.state
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
#[case("0x1A")]
#[case("0XfF")]
#[case("3.14")]
#[case(".5")]
#[case("2e10")]
#[case("1.5E-3")]
#[case("7.")]
#[case("42")]
fn test_numeric_literal_is_single_token(#[case] literal: &str) {
    let result = tokenize_line(literal, INITIAL_LINE_STATE).unwrap();
    assert_eq!(pairs(&result), vec![(TokenType::Numeric, literal.len())]);
    assert_eq!(result.state, INITIAL_LINE_STATE);
}

#[rstest]
#[case("interface", TokenType::Keyword)]
#[case("go", TokenType::Keyword)]
#[case("goto", TokenType::Keyword)]
#[case("int64", TokenType::Keyword)]
#[case("true", TokenType::LanguageConstant)]
#[case("false", TokenType::LanguageConstant)]
#[case("interfaceX", TokenType::VariableName)]
#[case("gopher", TokenType::VariableName)]
#[case("_bool", TokenType::VariableName)]
#[case("int64x", TokenType::VariableName)]
fn test_word_classification(#[case] word: &str, #[case] expected: TokenType) {
    let result = tokenize_line(word, INITIAL_LINE_STATE).unwrap();
    assert_eq!(pairs(&result), vec![(expected, word.len())]);
}

#[test]
fn test_keyword_stops_at_punctuation() {
    let result = tokenize_line("interface{}", INITIAL_LINE_STATE).unwrap();
    assert_eq!(
        pairs(&result),
        vec![
            (TokenType::Keyword, 9),
            (TokenType::Punctuation, 1),
            (TokenType::Punctuation, 1),
        ]
    );
}

#[test]
fn test_line_comment() {
    let result = tokenize_line("// hello", INITIAL_LINE_STATE).unwrap();
    assert_eq!(
        pairs(&result),
        vec![(TokenType::Comment, 2), (TokenType::Comment, 6)]
    );
    assert_eq!(result.state.state, State::TopLevelContent);
}

#[test]
fn test_trailing_comment_after_code() {
    let result = tokenize_line("x++ // bump", INITIAL_LINE_STATE).unwrap();
    assert_eq!(
        pairs(&result),
        vec![
            (TokenType::VariableName, 1),
            (TokenType::Punctuation, 1),
            (TokenType::Punctuation, 1),
            (TokenType::Whitespace, 1),
            (TokenType::Comment, 2),
            (TokenType::Comment, 5),
        ]
    );
}

#[test]
fn test_string_continues_on_next_line() {
    let first = tokenize_line("\"abc", INITIAL_LINE_STATE).unwrap();
    assert_eq!(
        pairs(&first),
        vec![(TokenType::Punctuation, 1), (TokenType::String, 3)]
    );
    assert_eq!(first.state.state, State::InsideDoubleQuoteString);

    let second = tokenize_line("def\"", first.state).unwrap();
    assert_eq!(
        pairs(&second),
        vec![(TokenType::String, 3), (TokenType::Punctuation, 1)]
    );
    assert_eq!(second.state.state, State::TopLevelContent);
}

#[test]
fn test_escaped_quote_stays_in_string() {
    let result = tokenize_line(r#""a\"b""#, INITIAL_LINE_STATE).unwrap();
    assert_eq!(
        pairs(&result),
        vec![
            (TokenType::Punctuation, 1),
            (TokenType::String, 1),
            (TokenType::String, 2),
            (TokenType::String, 1),
            (TokenType::Punctuation, 1),
        ]
    );
    assert_eq!(result.state.state, State::TopLevelContent);
}

#[test]
fn test_comment_state_resets_every_line() {
    let result = tokenize_line("x := 1 //", INITIAL_LINE_STATE).unwrap();
    assert_eq!(result.state.state, State::TopLevelContent);

    // A host that carried the comment state anyway still gets a single comment line back.
    let carried = tokenize_line("y := 2", LineState::new(State::InsideLineComment)).unwrap();
    assert_eq!(pairs(&carried), vec![(TokenType::Comment, 6)]);
    assert_eq!(carried.state.state, State::TopLevelContent);
}

#[test]
fn test_unknown_characters_fall_back_to_text() {
    let result = tokenize_line("a @b c", INITIAL_LINE_STATE).unwrap();
    assert_eq!(
        pairs(&result),
        vec![
            (TokenType::VariableName, 1),
            (TokenType::Whitespace, 1),
            (TokenType::Text, 4),
        ]
    );
}

#[test]
fn test_backtick_string_is_unimplemented() {
    let err = tokenize_line("s := `raw`", INITIAL_LINE_STATE).unwrap_err();
    assert_eq!(err, TokenizeError::UnhandledState(State::InsideBacktickString));
}

#[test]
fn test_document_snapshot() {
    let lines = [
        "package main",
        "import \"fmt\"",
        "func main() {",
        "\ts := \"multi\\",
        "line\" // done",
        "\tx := 0x1F + .5",
        "}",
    ];
    let results = tokenize_lines(&lines);

    insta::assert_snapshot!(render(&results), @r###"
    1: Keyword(7) Whitespace(1) VariableName(4) -> TopLevelContent
    2: Keyword(6) Whitespace(1) Punctuation(1) String(3) Punctuation(1) -> TopLevelContent
    3: Keyword(4) Whitespace(1) VariableName(4) Punctuation(1) Punctuation(1) Whitespace(1) Punctuation(1) -> TopLevelContent
    4: Whitespace(1) VariableName(1) Whitespace(1) Punctuation(1) Punctuation(1) Whitespace(1) Punctuation(1) String(5) String(1) -> InsideDoubleQuoteString
    5: String(4) Punctuation(1) Whitespace(1) Comment(2) Comment(5) -> TopLevelContent
    6: Whitespace(1) VariableName(1) Whitespace(1) Punctuation(1) Punctuation(1) Whitespace(1) Numeric(4) Whitespace(1) Punctuation(1) Whitespace(1) Numeric(2) -> TopLevelContent
    7: Punctuation(1) -> TopLevelContent
    "###);
}

/// Re-lex after an edit the way an incremental host does: recompute downwards and stop as soon
/// as a recomputed exit state matches the cached one.
#[test]
fn test_incremental_relex_stops_when_states_converge() {
    let mut lines = vec!["a := 1", "b := \"x\"", "c := 2", "d := 3"];
    let cached: Vec<LineState> = tokenize_lines(&lines).iter().map(|r| r.state).collect();

    // Opening an unterminated string on line 0 changes every following exit state.
    lines[0] = "a := \"1";
    let mut state = INITIAL_LINE_STATE;
    let mut recomputed = 0;
    for (index, line) in lines.iter().enumerate() {
        let result = tokenize_line(line, state).unwrap();
        recomputed += 1;
        let converged = is_line_state_equal(&result.state, &cached[index]);
        state = result.state;
        if converged {
            break;
        }
    }
    // Line 1 closes the open string with its first quote and reopens it with the second.
    assert_eq!(recomputed, lines.len());

    // An edit that leaves the exit state alone stops after the edited line.
    lines[0] = "a := 10";
    let result = tokenize_line(lines[0], INITIAL_LINE_STATE).unwrap();
    assert!(is_line_state_equal(&result.state, &cached[0]));
}
