//! # BigNum
//! Arbitrary-precision signed integers stored digit by digit in a radix between 2 and 16.
//! Zero is always a single `0` digit with a [`Sign::Plus`] sign.
//! # Example
//! ```
//! use radix_num::BigNum;
//!
//! let a = BigNum::from_str_radix("-1A", 16).unwrap();
//! assert_eq!(a.to_text(), "-1A");
//! assert_eq!(a.radix(), 16);
//! assert_eq!(BigNum::from(-26).to_text(), "-26");
//! ```

use std::fmt::Display;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::digit_buf::DigitBuf;
use crate::error::{BigNumError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Self::Output {
        if self == rhs { Sign::Plus } else { Sign::Minus }
    }
}

#[derive(Debug, Clone)]
pub struct BigNum {
    pub(crate) sign: Sign,
    pub(crate) digits: DigitBuf,
    pub(crate) radix: u32,
}

// 实现构造
impl BigNum {
    /// Builds a number from raw parts and normalizes it.
    /// Digits are least significant first and must be below `radix`.
    pub(crate) fn from_parts(sign: Sign, digits: DigitBuf, radix: u32) -> BigNum {
        let mut n = BigNum { sign, digits, radix };
        n.normalize();
        n
    }
    pub fn zero(radix: u32) -> Result<BigNum> {
        BigNum::small(0, radix)
    }
    pub fn one(radix: u32) -> Result<BigNum> {
        BigNum::small(1, radix)
    }
    fn small(digit: u8, radix: u32) -> Result<BigNum> {
        if !is_valid_radix(radix) {
            return Err(BigNumError::InvalidRadix(radix));
        }
        Ok(BigNum::from_parts(Sign::Plus, DigitBuf::from(&[digit][..]), radix))
    }
}

// 实现解析
impl BigNum {
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BigNum> {
        if !is_valid_radix(radix) {
            return Err(BigNumError::InvalidRadix(radix));
        }
        let invalid = || BigNumError::InvalidNumber { numeral: val.to_string(), radix };

        let (sign, body) = match val.as_bytes().first() {
            Some(b'-') => (Sign::Minus, &val[1..]),
            Some(b'+') => (Sign::Plus, &val[1..]),
            _ => (Sign::Plus, val),
        };
        if body.is_empty() {
            return Err(invalid());
        }

        let mut digits = DigitBuf::new();
        for c in body.chars() {
            let d = digit_value(c);
            if d == INVALID_DIGIT || d as u32 >= radix {
                return Err(invalid());
            }
            digits.append(d)?;
        }
        digits.reverse();

        Ok(BigNum::from_parts(sign, digits, radix))
    }

    /// Decimal value of a machine integer.
    pub fn from_i64(val: i64) -> BigNum {
        let sign = if val < 0 { Sign::Minus } else { Sign::Plus };
        BigNum::from_decimal_text(sign, &val.unsigned_abs().to_string())
    }

    fn from_decimal_text(sign: Sign, text: &str) -> BigNum {
        let digits: Vec<u8> = text.bytes().rev().map(|b| b - b'0').collect();
        BigNum::from_parts(sign, DigitBuf::from(&digits[..]), DECIMAL_RADIX)
    }
}

impl FromStr for BigNum {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<BigNum> {
        BigNum::from_str_radix(s, DECIMAL_RADIX)
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNum {
        fn from(val: $u) -> Self {
            BigNum::from_decimal_text(Sign::Plus, &val.to_string())
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigNum {
        fn from(val: $i) -> Self {
            BigNum::from_i64(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, u64, usize);
impl_signed_to_big_num!(i8, i16, i32, i64, isize);

// 访问器
impl BigNum {
    pub fn sign(&self) -> Sign {
        self.sign
    }
    pub fn radix(&self) -> u32 {
        self.radix
    }
    pub fn digits(&self) -> &DigitBuf {
        &self.digits
    }
    /// Number of digits, zero counts as one.
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        self.digits.as_slice() == [0]
    }
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }
    pub fn abs(&self) -> BigNum {
        let mut n = self.clone();
        n.sign = Sign::Plus;
        n
    }

    /// Drops most significant zero digits and gives zero its `Plus` sign.
    pub fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(0) {
            self.digits.truncate_last();
        }
        if self.digits.is_empty() {
            // 空缓冲区视为 0
            self.digits = DigitBuf::from(&[0][..]);
        }
        if self.is_zero() {
            self.sign = Sign::Plus;
        }
    }
}

impl Neg for BigNum {
    type Output = BigNum;

    fn neg(self) -> Self::Output {
        let BigNum { sign, digits, radix } = self;
        BigNum::from_parts(-sign, digits, radix)
    }
}

impl Neg for &BigNum {
    type Output = BigNum;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现打印
impl BigNum {
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(self.len() + 1);
        if self.sign == Sign::Minus {
            s.push('-');
        }
        s.extend(self.digits.iter().rev().map(|&d| DIGITS[d as usize]));
        s
    }
}

impl Display for BigNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.radix == other.radix && self.sign == other.sign && self.digits == other.digits
    }
}
impl Eq for BigNum {}

#[test]
fn test_parse_round_trip() {
    let cases = [
        ("0", 10, "0"),
        ("-0", 10, "0"),
        ("+000", 2, "0"),
        ("000123", 10, "123"),
        ("+42", 10, "42"),
        ("-0042", 10, "-42"),
        ("FACE", 16, "FACE"),
        ("-101101", 2, "-101101"),
        ("876", 9, "876"),
    ];
    for (numeral, radix, canonical) in cases {
        let n = BigNum::from_str_radix(numeral, radix).unwrap();
        assert_eq!(n.to_text(), canonical, "numeral = {}", numeral);
        assert_eq!(n.radix(), radix);
    }
}

#[test]
fn test_parse_stores_least_significant_first() {
    let n = BigNum::from_str_radix("1230", 10).unwrap();
    assert_eq!(n.digits().as_slice(), &[0, 3, 2, 1]);
    let z = BigNum::from_str_radix("-000", 10).unwrap();
    assert_eq!(z.digits().as_slice(), &[0]);
    assert_eq!(z.sign(), Sign::Plus);
}

#[test]
fn test_parse_rejects() {
    assert_eq!(
        BigNum::from_str_radix("129", 9),
        Err(BigNumError::InvalidNumber { numeral: "129".to_string(), radix: 9 })
    );
    assert!(BigNum::from_str_radix("fa", 16).is_err());
    assert!(BigNum::from_str_radix("", 10).is_err());
    assert!(BigNum::from_str_radix("-", 10).is_err());
    assert!(BigNum::from_str_radix("1-2", 10).is_err());
    assert!(BigNum::from_str_radix("12 ", 10).is_err());
    assert!(BigNum::from_str_radix("１", 10).is_err());
    assert_eq!(BigNum::from_str_radix("1", 17), Err(BigNumError::InvalidRadix(17)));
    assert_eq!(BigNum::from_str_radix("1", 1), Err(BigNumError::InvalidRadix(1)));
}

#[test]
fn test_from() {
    assert_eq!(BigNum::from(0).to_text(), "0");
    assert_eq!(BigNum::from(-125).to_text(), "-125");
    assert_eq!(BigNum::from(i64::MIN).to_text(), "-9223372036854775808");
    assert_eq!(BigNum::from(u64::MAX).to_text(), "18446744073709551615");
    assert_eq!(BigNum::from(7u8).radix(), 10);
    let n: BigNum = "-31".parse().unwrap();
    assert_eq!(n, BigNum::from(-31));
}

#[test]
fn test_normalize() {
    let mut n = BigNum { sign: Sign::Minus, digits: DigitBuf::from(&[0, 0, 0][..]), radix: 10 };
    n.normalize();
    assert_eq!(n.to_text(), "0");
    assert_eq!(n.sign(), Sign::Plus);

    let mut n = BigNum { sign: Sign::Minus, digits: DigitBuf::new(), radix: 10 };
    n.normalize();
    assert!(n.is_zero());
    assert!(!n.is_negative());

    let mut n = BigNum { sign: Sign::Minus, digits: DigitBuf::from(&[5, 0, 0][..]), radix: 10 };
    n.normalize();
    assert_eq!(n.to_text(), "-5");
}

#[test]
fn test_neg() {
    let n = BigNum::from(12);
    assert_eq!((-&n).to_text(), "-12");
    assert_eq!((-(-n)).to_text(), "12");
    assert_eq!((-BigNum::from(0)).to_text(), "0");
}

#[test]
fn test_eq_respects_radix() {
    let a = BigNum::from_str_radix("11", 10).unwrap();
    let b = BigNum::from_str_radix("11", 2).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.clone(), a);
}
