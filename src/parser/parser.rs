use radix_num::{is_valid_radix, BigNum, BigNumError};

use super::ast::{Block, Header, Line, Operation, Record};
use crate::error::ErrorFlag;
use crate::tokenizer::{tokenize_line, LineTokenType, Token};

// 行文法
// Record -> Header | Operand | TooMany
// Header  -> op base | base base
// Operand -> numeral
// op      -> + | - | * | / | ^ | %
// base    -> decimal 2..=16

/// Classifies one input line. Blank lines give `None`.
pub fn parse_line(text: &str) -> Option<Record> {
    let mut tokens = tokenize_line(text);
    let echo = tokens.iter().map(|t| t.val.as_str()).collect::<Vec<_>>().join(" ");
    let line = match tokens.len() {
        0 => return None,
        1 => Line::Operand(tokens.remove(0)),
        2 => Line::Header(parse_header(&tokens[0], &tokens[1])),
        _ => Line::TooManyWords,
    };
    Some(Record { echo, line })
}

fn parse_header(
    first: &Token<LineTokenType>,
    second: &Token<LineTokenType>,
) -> Result<Header, ErrorFlag> {
    match first.ty {
        LineTokenType::Operator => {
            // 运算符后的进制不合法时整个运算视为未定义
            let operation = Operation::from_symbol(&first.val).ok_or(ErrorFlag::InvalidOperator)?;
            let base = parse_base(second).ok_or(ErrorFlag::InvalidOperator)?;
            Ok(Header { block: Block::Arithmetic(operation), base })
        }
        LineTokenType::Numeral => {
            let from = parse_base(first).ok_or(ErrorFlag::InvalidOperator)?;
            let to = parse_base(second).ok_or(ErrorFlag::InvalidBase)?;
            Ok(Header { block: Block::ChangeBase { to }, base: from })
        }
        LineTokenType::Unknown => Err(ErrorFlag::InvalidOperator),
    }
}

/// A radix written as plain decimal digits, `2` to `16`.
fn parse_base(token: &Token<LineTokenType>) -> Option<u32> {
    let val = &token.val;
    if token.ty != LineTokenType::Numeral || val.len() > 2 || !val.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    val.parse().ok().filter(|&radix| is_valid_radix(radix))
}

/// Reads an operand line as a number in `radix`.
pub fn parse_operand(token: &Token<LineTokenType>, radix: u32) -> Result<BigNum, BigNumError> {
    match token.ty {
        LineTokenType::Numeral => BigNum::from_str_radix(&token.val, radix),
        _ => Err(BigNumError::InvalidNumber { numeral: token.val.clone(), radix }),
    }
}
