//! Radix Num \
//! This crate provides:
//! - [`DigitBuf`]: a growable digit store with an explicit doubling growth policy.
//! - [`BigNum`]: arbitrary-precision signed integers in any radix from 2 to 16.
//! - [`ops`]: schoolbook add, subtract, multiply, divide, modulo, power and radix conversion.

mod big_num;
mod big_num_cache;
mod big_num_constants;
mod digit_buf;
mod error;
pub mod ops;

pub use big_num::{BigNum, Sign};
pub use big_num_constants::{DIGITS, MAX_RADIX, MIN_RADIX, is_valid_radix};
pub use digit_buf::DigitBuf;
pub use error::{BigNumError, ErrorKind, Result};

#[cfg(test)]
mod tests {
    use crate::{ops, BigNum};

    #[test]
    fn it_works() {
        let a = BigNum::from_str_radix("123", 9).unwrap();
        let b = ops::convert_radix(BigNum::from(-125), 9).unwrap();
        let sum = ops::add(a, &b).unwrap();
        assert_eq!(sum.to_text(), "-25");
        assert_eq!(sum.radix(), 9);

        let ten = BigNum::from(10);
        assert_eq!(ops::pow(BigNum::from(3), &ten).unwrap().to_text(), "59049");
    }
}
