use radix_num::{ops, BigNum, Result};

use crate::error::ErrorFlag;
use crate::tokenizer::{LineTokenType, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Modulo,
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Operation> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "*" => Some(Operation::Multiply),
            "/" => Some(Operation::Divide),
            "^" => Some(Operation::Exponentiate),
            "%" => Some(Operation::Modulo),
            _ => None,
        }
    }

    /// `acc op operand`.
    pub fn apply(&self, acc: BigNum, operand: &BigNum) -> Result<BigNum> {
        match self {
            Operation::Add => ops::add(acc, operand),
            Operation::Subtract => ops::subtract(acc, operand),
            Operation::Multiply => ops::multiply(acc, operand),
            Operation::Divide => ops::divide(acc, operand),
            Operation::Exponentiate => ops::pow(acc, operand),
            Operation::Modulo => ops::modulo(acc, operand),
        }
    }
}

/// What a block does with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Folds every operand into the accumulator with `Operation`.
    Arithmetic(Operation),
    /// Takes exactly one operand and rewrites it in radix `to`.
    ChangeBase { to: u32 },
}

/// Opens a block: what it does and the radix its operands are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub block: Block,
    pub base: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Header(std::result::Result<Header, ErrorFlag>),
    Operand(Token<LineTokenType>),
    TooManyWords,
}

/// A non-blank input line together with the text echoed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub echo: String,
    pub line: Line,
}
