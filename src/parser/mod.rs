pub mod ast;
pub mod parser;

pub use crate::parser::ast::{Block, Header, Line, Operation, Record};
pub use crate::parser::parser::{parse_line, parse_operand};
