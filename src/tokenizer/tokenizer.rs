use lazy_static::lazy_static;

use super::dfa::DFA;
use super::nfa::NFA;
use super::token::{LineTokenType, Token};
use crate::link_nfa;

/// Builds the automaton that classifies one word of a calculator input line.
pub fn get_line_tokenizer() -> DFA<LineTokenType> {
    let mut operator = NFA::from_symbol_set("+-*/^%");
    operator.set_state(LineTokenType::Operator);

    let sign = NFA::from_symbol_set("+-").optional();
    let digit = NFA::from_symbol_range('0'..='9') | NFA::from_symbol_range('A'..='F');
    let mut numeral = sign & digit.clone() & digit.closure();
    numeral.set_state(LineTokenType::Numeral);

    let tokenizer_nfa = link_nfa!(operator, numeral);

    DFA::subset_construct(&tokenizer_nfa)
}

lazy_static! {
    static ref LINE_TOKENIZER: DFA<LineTokenType> = get_line_tokenizer();
}

/// Splits `line` on whitespace and classifies every word as a whole.
pub fn tokenize_line(line: &str) -> Vec<Token<LineTokenType>> {
    line.split_whitespace()
        .map(|word| {
            let ty = LINE_TOKENIZER.match_one(word).unwrap_or(LineTokenType::Unknown);
            Token::new(word.to_string(), ty)
        })
        .collect()
}

#[test]
fn test_tokenizer() {
    let tokens = tokenize_line("  ^\t10 ");
    assert_eq!(
        tokens,
        vec![
            Token::new("^".to_string(), LineTokenType::Operator),
            Token::new("10".to_string(), LineTokenType::Numeral),
        ]
    );
}

#[test]
fn test_classify_words() {
    let classes: Vec<LineTokenType> = tokenize_line("+ - * / ^ % -5 +0A FACE 007 fa 1.5 -- +- x 12G")
        .into_iter()
        .map(|t| t.ty)
        .collect();
    use LineTokenType::*;
    assert_eq!(
        classes,
        vec![
            Operator, Operator, Operator, Operator, Operator, Operator, Numeral, Numeral, Numeral,
            Numeral, Unknown, Unknown, Unknown, Unknown, Unknown, Unknown,
        ]
    );
}

#[test]
fn test_blank_line() {
    assert!(tokenize_line("").is_empty());
    assert!(tokenize_line(" \t \r").is_empty());
}
