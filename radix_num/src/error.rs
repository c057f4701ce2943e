use thiserror::Error;

/// Failure categories shared by every [`BigNumError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    BaseMismatch,
    DivisionByZero,
    DomainError,
    ResourceExhausted,
}

/// Errors reported by the digit buffer and the arithmetic engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigNumError {
    #[error("index {index} out of bounds for {len} digits")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("cannot reserve capacity {requested} below current length {len}")]
    InvalidCapacity { requested: usize, len: usize },

    #[error("radix {0} outside supported range 2..=16")]
    InvalidRadix(u32),

    #[error("`{numeral}` is not a valid number in radix {radix}")]
    InvalidNumber { numeral: String, radix: u32 },

    #[error("operands coded in different radices ({left} and {right})")]
    BaseMismatch { left: u32, right: u32 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo is not defined for negative operands")]
    NegativeModulo,

    #[error("negative exponent")]
    NegativeExponent,

    #[error("digit buffer cannot grow to {requested} digits")]
    ResourceExhausted { requested: usize },
}

impl BigNumError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigNumError::IndexOutOfBounds { .. }
            | BigNumError::InvalidCapacity { .. }
            | BigNumError::InvalidRadix(_)
            | BigNumError::InvalidNumber { .. } => ErrorKind::InvalidArgument,
            BigNumError::BaseMismatch { .. } => ErrorKind::BaseMismatch,
            BigNumError::DivisionByZero => ErrorKind::DivisionByZero,
            BigNumError::NegativeModulo
            | BigNumError::NegativeExponent => ErrorKind::DomainError,
            BigNumError::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
        }
    }
}

pub type Result<T> = std::result::Result<T, BigNumError>;
