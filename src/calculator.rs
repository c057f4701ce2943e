//! # Calculator
//! Runs a batch file through the arithmetic engine and writes a transcript.
//!
//! Input is split into blocks. A block opens with a two word header (`<op> <base>`
//! or `<from> <to>`) and is followed by one operand per line. The first operand is
//! loaded into the accumulator and every later one is applied to it. The transcript
//! echoes each line, marks failed lines with `[err: FLAG]` and closes each block
//! with its result and a separator.
//! # Example
//! ```
//! use radix_calc::Calculator;
//!
//! let mut calc = Calculator::new(Vec::new());
//! for line in ["+ 10", "40", "2"] {
//!     calc.process_line(line).unwrap();
//! }
//! let out = String::from_utf8(calc.finish().unwrap()).unwrap();
//! assert!(out.starts_with("+ 10\n\n40\n\n2\n\n42\n"));
//! ```

use std::io::{BufRead, Write};

use log::{debug, warn};
use radix_num::{ops, BigNum, BigNumError};

use crate::error::{CalcError, ErrorFlag};
use crate::parser::{parse_line, parse_operand, Block, Header, Line, Operation};
use crate::tokenizer::{LineTokenType, Token};

pub const SEPARATOR: &str = "--------------------------------------------------------------";

pub struct Calculator<W: Write> {
    out: W,
    memory: Option<BigNum>,
    ready_result: bool,
    header: Option<Header>,
    flag: Option<ErrorFlag>,
    argument_counter: usize,
}

impl<W: Write> Calculator<W> {
    pub fn new(out: W) -> Self {
        Calculator {
            out,
            memory: None,
            ready_result: false,
            header: None,
            flag: None,
            argument_counter: 0,
        }
    }

    /// Processes every line of `input`, then closes the last block.
    pub fn run<R: BufRead>(mut self, input: R) -> Result<W, CalcError> {
        for line in input.lines() {
            self.process_line(&line?)?;
        }
        self.finish()
    }

    pub fn process_line(&mut self, text: &str) -> Result<(), CalcError> {
        let record = match parse_line(text) {
            Some(record) => record,
            None => return Ok(()),
        };
        match record.line {
            Line::Operand(token) => self.operand(&token),
            Line::Header(header) => {
                self.close_block()?;
                self.open_block(header);
            }
            Line::TooManyWords => self.flag = Some(ErrorFlag::InvalidNumberOfArg),
        }
        match self.flag {
            Some(flag) => {
                debug!("`{}` failed with {}", record.echo, flag);
                writeln!(self.out, "{} [err: {}]\n", record.echo, flag)?;
            }
            None => writeln!(self.out, "{}\n", record.echo)?,
        }
        Ok(())
    }

    /// Writes the outcome of the last block and hands back the sink.
    pub fn finish(mut self) -> Result<W, CalcError> {
        if self.ready_result {
            self.write_result()?;
        } else if self.flag.is_none() {
            self.write_error(ErrorFlag::InvalidNumberOfArg)?;
        }
        writeln!(self.out, "{}\n", SEPARATOR)?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn open_block(&mut self, header: Result<Header, ErrorFlag>) {
        self.argument_counter = 0;
        match header {
            Ok(header) => {
                debug!("block {:?} in radix {}", header.block, header.base);
                self.header = Some(header);
                self.flag = None;
            }
            Err(flag) => {
                self.header = None;
                self.flag = Some(flag);
            }
        }
    }

    fn close_block(&mut self) -> Result<(), CalcError> {
        if self.ready_result {
            self.write_result()?;
        } else if self.argument_counter != 0 {
            self.write_error(ErrorFlag::InvalidNumberOfArg)?;
        } else if let Some(flag) = self.flag {
            self.write_error(flag)?;
        } else {
            return Ok(());
        }
        writeln!(self.out, "{}\n", SEPARATOR)?;
        Ok(())
    }

    fn write_result(&mut self) -> Result<(), CalcError> {
        self.ready_result = false;
        match &self.memory {
            Some(result) => writeln!(self.out, "{}", result)?,
            None => warn!("result flagged ready without a value"),
        }
        Ok(())
    }

    fn write_error(&mut self, flag: ErrorFlag) -> Result<(), CalcError> {
        self.flag = Some(flag);
        writeln!(self.out, "[err: {}]\n", flag)?;
        Ok(())
    }

    fn operand(&mut self, token: &Token<LineTokenType>) {
        let header = match self.header {
            Some(header) => header,
            None => {
                self.flag = Some(ErrorFlag::InvalidOperator);
                return;
            }
        };
        let value = match parse_operand(token, header.base) {
            Ok(value) => value,
            Err(err) => {
                debug!("{}", err);
                self.flag = Some(ErrorFlag::InvalidNumber);
                return;
            }
        };
        self.flag = None;
        self.argument_counter += 1;
        match header.block {
            Block::ChangeBase { to } => self.convert(value, to),
            Block::Arithmetic(_) if self.argument_counter == 1 => self.memory = Some(value),
            Block::Arithmetic(operation) => self.apply(value, operation),
        }
    }

    /// A base change block takes one operand and is ready as soon as it is converted.
    fn convert(&mut self, value: BigNum, to: u32) {
        if self.argument_counter > 1 {
            self.argument_counter -= 1;
            self.flag = Some(ErrorFlag::InvalidNumberOfArg);
            return;
        }
        match ops::convert_radix(value, to) {
            Ok(converted) => {
                self.memory = Some(converted);
                self.ready_result = true;
            }
            Err(err) => self.reject(&err),
        }
    }

    fn apply(&mut self, value: BigNum, operation: Operation) {
        // 运算会消耗左操作数，失败时累加器必须保持原值
        let acc = match &self.memory {
            Some(acc) => acc.clone(),
            None => return,
        };
        match operation.apply(acc, &value) {
            Ok(result) => {
                self.memory = Some(result);
                self.ready_result = true;
            }
            Err(err) => self.reject(&err),
        }
    }

    /// Discards the operand just read, the accumulator keeps its value.
    fn reject(&mut self, err: &BigNumError) {
        debug!("operand rejected: {}", err);
        self.argument_counter -= 1;
        self.flag = Some(ErrorFlag::from(err));
    }
}
