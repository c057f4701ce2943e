use std::fmt;
use std::io;
use std::path::PathBuf;

use radix_num::{BigNumError, ErrorKind};
use thiserror::Error;

/// Failures that stop the calculator as a whole.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("usage: {program} <input> [output]")]
    Usage { program: String },

    #[error("cannot read `{}`: {source}", .path.display())]
    Input { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },

    #[error("output path `{}` has no file name", .path.display())]
    NoFileName { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Per-line failure recorded in the transcript as `[err: FLAG]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFlag {
    InvalidOperator,
    InvalidBase,
    InvalidNumberOfArg,
    InvalidNumber,
    DivisionByZero,
}

impl ErrorFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorFlag::InvalidOperator => "INVALID_OPERATOR",
            ErrorFlag::InvalidBase => "INVALID_BASE",
            ErrorFlag::InvalidNumberOfArg => "INVALID_NUMBER_OF_ARG",
            ErrorFlag::InvalidNumber => "INVALID_NUMBER",
            ErrorFlag::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}

impl fmt::Display for ErrorFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&BigNumError> for ErrorFlag {
    fn from(err: &BigNumError) -> Self {
        match err.kind() {
            ErrorKind::DivisionByZero => ErrorFlag::DivisionByZero,
            ErrorKind::BaseMismatch => ErrorFlag::InvalidBase,
            ErrorKind::InvalidArgument
            | ErrorKind::DomainError
            | ErrorKind::ResourceExhausted => ErrorFlag::InvalidNumber,
        }
    }
}

#[cfg(test)]
mod tests {
    use radix_num::BigNumError;

    use super::{CalcError, ErrorFlag};

    #[test]
    fn test_flag_from_engine_error() {
        assert_eq!(ErrorFlag::from(&BigNumError::DivisionByZero), ErrorFlag::DivisionByZero);
        assert_eq!(ErrorFlag::from(&BigNumError::NegativeExponent), ErrorFlag::InvalidNumber);
        assert_eq!(ErrorFlag::from(&BigNumError::NegativeModulo), ErrorFlag::InvalidNumber);
        assert_eq!(
            ErrorFlag::from(&BigNumError::BaseMismatch { left: 2, right: 3 }),
            ErrorFlag::InvalidBase
        );
        assert_eq!(ErrorFlag::InvalidNumberOfArg.to_string(), "INVALID_NUMBER_OF_ARG");
    }

    #[test]
    fn test_usage_message() {
        let err = CalcError::Usage { program: "radix_calc".to_string() };
        assert_eq!(err.to_string(), "usage: radix_calc <input> [output]");
    }
}
