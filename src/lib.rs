//! Radix Calc \
//! Batch calculator over [`radix_num`] integers.
//! Lines are classified by a DFA built from Thompson NFAs, grouped into blocks by the
//! parser and evaluated by the [`Calculator`].

mod calculator;
mod config;
mod error;
mod parser;
mod tokenizer;

use std::fs::File;
use std::io::{BufReader, BufWriter};

use log::info;

pub use crate::calculator::{Calculator, SEPARATOR};
pub use crate::config::Config;
pub use crate::error::{CalcError, ErrorFlag};
pub use crate::parser::{parse_line, Block, Header, Line, Operation, Record};
pub use crate::tokenizer::{tokenize_line, LineTokenType, Token};

/// Reads `config.input` and writes its transcript to `config.output`.
pub fn run(config: &Config) -> Result<(), CalcError> {
    let input = File::open(&config.input)
        .map_err(|source| CalcError::Input { path: config.input.clone(), source })?;
    let output = File::create(&config.output)
        .map_err(|source| CalcError::Output { path: config.output.clone(), source })?;

    info!("calculating {} -> {}", config.input.display(), config.output.display());
    Calculator::new(BufWriter::new(output)).run(BufReader::new(input))?;
    info!("calculations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Calculator, SEPARATOR};

    #[test]
    fn it_works() {
        let input = "+ 9\n123\n-148\n\n7 12\n540263\n";
        let out = Calculator::new(Vec::new()).run(input.as_bytes()).unwrap();
        let expected = format!(
            "+ 9\n\n123\n\n-148\n\n-25\n{sep}\n\n7 12\n\n540263\n\n46332\n{sep}\n\n",
            sep = SEPARATOR
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
