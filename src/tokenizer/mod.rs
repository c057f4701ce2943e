pub(crate) mod nfa;
pub mod dfa;
pub mod token;
pub mod tokenizer;

pub use crate::tokenizer::dfa::DFA;
pub use crate::tokenizer::token::{LineTokenType, Token};
pub use crate::tokenizer::tokenizer::{get_line_tokenizer, tokenize_line};
