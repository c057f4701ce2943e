//! # Arithmetic
//! Schoolbook arithmetic over [`BigNum`] values.
//!
//! Every binary operation takes the left operand by value and the right one by reference and
//! hands back the result as a new owned value; the right operand is never modified.
//! Both operands must share a radix, mixed radices fail with [`BigNumError::BaseMismatch`].
//! Preconditions are checked before anything is computed.
//!
//! The left operand is consumed even when the call fails, so a caller that must keep its value
//! after a [`BigNumError::DivisionByZero`] or any other error passes a clone.
//!
//! The same operations are available through `std::ops` with a `Result` output:
//! ```
//! use radix_num::BigNum;
//!
//! let a = BigNum::from(120);
//! let b = BigNum::from(13);
//! assert_eq!((a.clone() / &b).unwrap().to_text(), "9");
//! assert_eq!((a.clone() % &b).unwrap().to_text(), "3");
//! assert!((a / &BigNum::from(0)).is_err());
//! ```

use std::cmp::Ordering;

use log::trace;

use crate::big_num::{BigNum, Sign};
use crate::big_num_cache::DECIMAL_CACHE;
use crate::big_num_constants::*;
use crate::digit_buf::DigitBuf;
use crate::error::{BigNumError, Result};

fn check_radix(a: &BigNum, b: &BigNum) -> Result<()> {
    if a.radix != b.radix {
        Err(BigNumError::BaseMismatch { left: a.radix, right: b.radix })
    } else {
        Ok(())
    }
}

// 杂项辅助函数，均作用于无前导 0 的数位序列
fn cmp_mag(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn trim(digits: &mut DigitBuf) {
    while digits.len() > 1 && digits.last() == Some(0) {
        digits.truncate_last();
    }
}

/// `acc += addend`, magnitudes only.
fn add_mag(acc: &mut DigitBuf, addend: &[u8], radix: u32) -> Result<()> {
    let n = acc.len().max(addend.len()) + 1;
    acc.resize(n)?;
    let mut carry = 0;
    for (i, slot) in acc.as_mut_slice().iter_mut().enumerate() {
        let sum = carry + *slot as u32 + addend.get(i).copied().unwrap_or(0) as u32;
        *slot = (sum % radix) as u8;
        carry = sum / radix;
    }
    trim(acc);
    Ok(())
}

/// `minuend -= subtrahend`, magnitudes only, requires `minuend >= subtrahend`.
fn sub_mag(minuend: &mut DigitBuf, subtrahend: &[u8], radix: u32) {
    let mut borrow = 0;
    for (i, slot) in minuend.as_mut_slice().iter_mut().enumerate() {
        let mut diff = *slot as i32 - borrow - subtrahend.get(i).copied().unwrap_or(0) as i32;
        if diff < 0 {
            diff += radix as i32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *slot = diff as u8;
    }
    trim(minuend);
}

/// `lhs + (rhs_sign, rhs)`, shared by addition and subtraction.
fn add_signed(lhs: BigNum, rhs_sign: Sign, rhs: &[u8]) -> Result<BigNum> {
    let BigNum { sign, mut digits, radix } = lhs;

    if sign == rhs_sign {
        add_mag(&mut digits, rhs, radix)?;
        return Ok(BigNum::from_parts(sign, digits, radix));
    }

    match cmp_mag(digits.as_slice(), rhs) {
        Ordering::Equal => BigNum::zero(radix),
        Ordering::Greater => {
            sub_mag(&mut digits, rhs, radix);
            Ok(BigNum::from_parts(sign, digits, radix))
        }
        Ordering::Less => {
            let mut fresh = DigitBuf::from(rhs);
            sub_mag(&mut fresh, digits.as_slice(), radix);
            Ok(BigNum::from_parts(rhs_sign, fresh, radix))
        }
    }
}

// 实现大小比较
pub fn compare_magnitude(a: &BigNum, b: &BigNum) -> Result<Ordering> {
    check_radix(a, b)?;
    Ok(cmp_mag(a.digits.as_slice(), b.digits.as_slice()))
}

pub fn compare(a: &BigNum, b: &BigNum) -> Result<Ordering> {
    let mag = compare_magnitude(a, b)?;
    Ok(match (a.sign, b.sign) {
        (Sign::Plus, Sign::Minus) => Ordering::Greater,
        (Sign::Minus, Sign::Plus) => Ordering::Less,
        (Sign::Plus, Sign::Plus) => mag,
        (Sign::Minus, Sign::Minus) => mag.reverse(),
    })
}

impl PartialOrd for BigNum {
    /// `None` when the radices differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other).ok()
    }
}

// 实现加减法
pub fn add(lhs: BigNum, rhs: &BigNum) -> Result<BigNum> {
    check_radix(&lhs, rhs)?;
    add_signed(lhs, rhs.sign, rhs.digits.as_slice())
}

/// `lhs - rhs`, computed as `lhs + (-rhs)`.
pub fn subtract(lhs: BigNum, rhs: &BigNum) -> Result<BigNum> {
    check_radix(&lhs, rhs)?;
    add_signed(lhs, -rhs.sign, rhs.digits.as_slice())
}

// 实现乘法
/// Adds shifted copies of `lhs` once per unit of every digit of `rhs`.
pub fn multiply(lhs: BigNum, rhs: &BigNum) -> Result<BigNum> {
    check_radix(&lhs, rhs)?;
    let BigNum { sign, digits: mut row, radix } = lhs;

    let mut acc = DigitBuf::from(&[0][..]);
    for &d in rhs.digits.iter() {
        for _ in 0..d {
            add_mag(&mut acc, row.as_slice(), radix)?;
        }
        row.shift_up(1)?;
    }

    Ok(BigNum::from_parts(sign * rhs.sign, acc, radix))
}

// 实现除法
/// Truncating long division, returns `(quotient, remainder)`.
/// The remainder takes the dividend's sign so that `lhs == quotient * rhs + remainder`.
/// A zero divisor fails with [`BigNumError::DivisionByZero`] and drops `lhs`.
pub fn div_rem(lhs: BigNum, rhs: &BigNum) -> Result<(BigNum, BigNum)> {
    check_radix(&lhs, rhs)?;
    if rhs.is_zero() {
        return Err(BigNumError::DivisionByZero);
    }
    let BigNum { sign, mut digits, radix } = lhs;
    let divisor = rhs.digits.as_slice();

    let mut row = DigitBuf::from(&[0][..]);
    for i in (0..digits.len()).rev() {
        // 把被除数的第 i 位移入 row 的最低位
        row.shift_up(1)?;
        let quotient_digit = &mut digits.as_mut_slice()[i];
        row.as_mut_slice()[0] = *quotient_digit;
        *quotient_digit = 0;

        while cmp_mag(row.as_slice(), divisor) != Ordering::Less {
            sub_mag(&mut row, divisor, radix);
            digits.as_mut_slice()[i] += 1;
        }
    }

    let quotient = BigNum::from_parts(sign * rhs.sign, digits, radix);
    let remainder = BigNum::from_parts(sign, row, radix);
    Ok((quotient, remainder))
}

/// Quotient of [`div_rem`]. `lhs` is dropped when the divisor is zero.
pub fn divide(lhs: BigNum, rhs: &BigNum) -> Result<BigNum> {
    div_rem(lhs, rhs).map(|(quotient, _)| quotient)
}

// 实现求余
/// `lhs - rhs * floor(lhs / rhs)`, only defined for non-negative operands.
/// `lhs` is dropped on every failure, including a zero divisor.
pub fn modulo(lhs: BigNum, rhs: &BigNum) -> Result<BigNum> {
    check_radix(&lhs, rhs)?;
    if rhs.is_zero() {
        return Err(BigNumError::DivisionByZero);
    }
    if lhs.is_negative() || rhs.is_negative() {
        return Err(BigNumError::NegativeModulo);
    }
    let floor = divide(lhs.clone(), rhs)?;
    let product = multiply(floor, rhs)?;
    subtract(lhs, &product)
}

// 实现乘方
/// Square-and-multiply keyed on the binary digits of `exponent`.
pub fn pow(base: BigNum, exponent: &BigNum) -> Result<BigNum> {
    check_radix(&base, exponent)?;
    if exponent.is_negative() {
        return Err(BigNumError::NegativeExponent);
    }
    if exponent.is_zero() {
        return BigNum::one(base.radix);
    }

    let bits = convert_radix(exponent.clone(), 2)?;
    let mut acc = base.clone();
    // 最高位已由 acc = base 消耗，从次高位开始
    for &bit in bits.digits.iter().rev().skip(1) {
        acc = multiply(acc.clone(), &acc)?;
        if bit == 1 {
            acc = multiply(acc, &base)?;
        }
    }
    Ok(acc)
}

// 实现进制转换
/// Re-expresses `n` in `target`, going through a decimal intermediate.
pub fn convert_radix(n: BigNum, target: u32) -> Result<BigNum> {
    if !is_valid_radix(target) {
        return Err(BigNumError::InvalidRadix(target));
    }
    if n.radix == target {
        return Ok(n);
    }
    trace!("converting {} digits from radix {} to radix {}", n.len(), n.radix, target);

    let BigNum { sign, digits, radix } = n;
    let decimal = to_decimal(digits, radix)?;
    let converted = if target == DECIMAL_RADIX {
        decimal.digits
    } else {
        from_decimal(decimal, target)?
    };
    Ok(BigNum::from_parts(sign, converted, target))
}

/// Horner style accumulation: `sum(digit[i] * radix^i)` in decimal arithmetic.
fn to_decimal(digits: DigitBuf, radix: u32) -> Result<BigNum> {
    if radix == DECIMAL_RADIX {
        return Ok(BigNum::from_parts(Sign::Plus, digits, radix));
    }
    let source_radix = &DECIMAL_CACHE[radix as usize];
    let mut result = DECIMAL_CACHE[0].clone();
    let mut power = DECIMAL_CACHE[1].clone();
    for &d in digits.iter() {
        if d != 0 {
            let term = multiply(DECIMAL_CACHE[d as usize].clone(), &power)?;
            result = add(result, &term)?;
        }
        power = multiply(power, source_radix)?;
    }
    Ok(result)
}

/// Repeated division by `target`, remainders are the new digits least significant first.
fn from_decimal(mut decimal: BigNum, target: u32) -> Result<DigitBuf> {
    let divisor = &DECIMAL_CACHE[target as usize];
    let mut out = DigitBuf::new();
    while !decimal.is_zero() {
        let (quotient, remainder) = div_rem(decimal, divisor)?;
        out.append(small_value(&remainder))?;
        decimal = quotient;
    }
    Ok(out)
}

/// Value of a number known to be below 16.
fn small_value(n: &BigNum) -> u8 {
    n.digits.iter().rev().fold(0u32, |acc, &d| acc * n.radix + d as u32) as u8
}

macro_rules! impl_checked_op {
    ($($trait: ident, $method: ident, $func: ident);*) => {
    $(
    impl std::ops::$trait<&BigNum> for BigNum {
        type Output = Result<BigNum>;

        fn $method(self, rhs: &BigNum) -> Self::Output {
            $func(self, rhs)
        }
    }
    )*
    };
}
impl_checked_op!(Add, add, add; Sub, sub, subtract; Mul, mul, multiply; Div, div, divide; Rem, rem, modulo);

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::error::ErrorKind;

    fn num(s: &str, radix: u32) -> BigNum {
        BigNum::from_str_radix(s, radix).unwrap()
    }

    fn dec(s: &str) -> BigNum {
        num(s, 10)
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&dec("12"), &dec("9")), Ok(Ordering::Greater));
        assert_eq!(compare(&dec("-12"), &dec("-9")), Ok(Ordering::Less));
        assert_eq!(compare(&dec("-1"), &dec("0")), Ok(Ordering::Less));
        assert_eq!(compare(&dec("0"), &dec("-0")), Ok(Ordering::Equal));
        assert_eq!(compare(&dec("345"), &dec("354")), Ok(Ordering::Less));
        assert_eq!(compare_magnitude(&dec("-12"), &dec("9")), Ok(Ordering::Greater));
        assert_eq!(compare_magnitude(&dec("-77"), &dec("77")), Ok(Ordering::Equal));
        assert_eq!(
            compare(&num("1", 2), &num("1", 3)),
            Err(BigNumError::BaseMismatch { left: 2, right: 3 })
        );
        assert!(dec("-5") < dec("3"));
        assert_eq!(num("1", 2).partial_cmp(&num("1", 3)), None);
    }

    #[test]
    fn test_add() {
        let cases = [
            ("999", "1", "1000"),
            ("0", "0", "0"),
            ("-5", "-7", "-12"),
            ("-5", "7", "2"),
            ("5", "-7", "-2"),
            ("7", "-7", "0"),
            ("-7", "7", "0"),
            ("123456789123456789", "876543210876543211", "1000000000000000000"),
        ];
        for (a, b, sum) in cases {
            assert_eq!(add(dec(a), &dec(b)).unwrap().to_text(), sum, "{} + {}", a, b);
        }
        assert_eq!(add(num("FF", 16), &num("1", 16)).unwrap().to_text(), "100");
        assert_eq!(add(num("111", 2), &num("1", 2)).unwrap().to_text(), "1000");
    }

    #[test]
    fn test_add_leaves_rhs_untouched() {
        let b = dec("-250");
        let _ = add(dec("1000"), &b).unwrap();
        assert_eq!(b.to_text(), "-250");
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_sub() {
        let cases = [
            ("1000", "1", "999"),
            ("1", "1000", "-999"),
            ("42", "42", "0"),
            ("-3", "4", "-7"),
            ("3", "-4", "7"),
            ("-3", "-4", "1"),
            ("-4", "-3", "-1"),
            ("0", "5", "-5"),
            ("5", "0", "5"),
            ("100000000000000000000", "1", "99999999999999999999"),
        ];
        for (a, b, diff) in cases {
            assert_eq!(subtract(dec(a), &dec(b)).unwrap().to_text(), diff, "{} - {}", a, b);
        }
        assert_eq!(subtract(num("1000", 2), &num("1", 2)).unwrap().to_text(), "111");
    }

    #[test]
    fn test_mul() {
        let cases = [
            ("12", "12", "144"),
            ("0", "-12", "0"),
            ("-12", "0", "0"),
            ("-3", "7", "-21"),
            ("-3", "-7", "21"),
            ("99999", "99999", "9999800001"),
            ("123456789", "987654321", "121932631112635269"),
        ];
        for (a, b, product) in cases {
            assert_eq!(multiply(dec(a), &dec(b)).unwrap().to_text(), product, "{} * {}", a, b);
        }
        assert_eq!(multiply(num("F", 16), &num("F", 16)).unwrap().to_text(), "E1");
        assert_eq!(multiply(num("-101", 2), &num("11", 2)).unwrap().to_text(), "-1111");
    }

    #[test]
    fn test_div() {
        let cases = [
            ("120", "13", "9"),
            ("7", "7", "1"),
            ("6", "7", "0"),
            ("0", "7", "0"),
            ("-7", "2", "-3"),
            ("7", "-2", "-3"),
            ("-7", "-2", "3"),
            ("10000000000000000000000000000000000", "1000", "10000000000000000000000000000000"),
        ];
        for (a, b, quotient) in cases {
            assert_eq!(divide(dec(a), &dec(b)).unwrap().to_text(), quotient, "{} / {}", a, b);
        }
        assert_eq!(divide(num("E1", 16), &num("F", 16)).unwrap().to_text(), "F");
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = div_rem(dec("12345"), &dec("67")).unwrap();
        assert_eq!((q.to_text(), r.to_text()), ("184".to_string(), "17".to_string()));
        let (q, r) = div_rem(dec("-12345"), &dec("67")).unwrap();
        assert_eq!((q.to_text(), r.to_text()), ("-184".to_string(), "-17".to_string()));
    }

    #[test]
    fn test_div_by_zero() {
        let a = dec("10");
        let zero = dec("0");
        assert_eq!(divide(a.clone(), &zero), Err(BigNumError::DivisionByZero));
        assert_eq!(modulo(a.clone(), &zero), Err(BigNumError::DivisionByZero));
        assert_eq!(a.to_text(), "10");
        assert_eq!(zero.to_text(), "0");
    }

    #[test]
    fn test_failed_division_keeps_cloned_dividend() {
        let mut acc = dec("-1234567890123");
        let zero = dec("0");
        for _ in 0..3 {
            match div_rem(acc.clone(), &zero) {
                Ok(_) => panic!("division by zero succeeded"),
                Err(err) => assert_eq!(err, BigNumError::DivisionByZero),
            }
        }
        assert!(modulo(acc.clone(), &dec("-3")).is_err());
        assert_eq!(acc.to_text(), "-1234567890123");

        acc = divide(acc, &dec("1000")).unwrap();
        assert_eq!(acc.to_text(), "-1234567890");
    }

    #[test]
    fn test_mod() {
        assert_eq!(modulo(dec("12"), &dec("8")).unwrap().to_text(), "4");
        assert_eq!(modulo(dec("10000000000000000"), &dec("10")).unwrap().to_text(), "0");
        assert_eq!(modulo(dec("3"), &dec("8")).unwrap().to_text(), "3");
        assert_eq!(modulo(num("1101", 2), &num("101", 2)).unwrap().to_text(), "11");
        let err = modulo(dec("-12"), &dec("8")).unwrap_err();
        assert_eq!(err, BigNumError::NegativeModulo);
        assert_eq!(err.kind(), ErrorKind::DomainError);
        assert!(modulo(dec("12"), &dec("-8")).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(dec("3"), &dec("10")).unwrap().to_text(), "59049");
        assert_eq!(pow(dec("2"), &dec("64")).unwrap().to_text(), "18446744073709551616");
        assert_eq!(pow(dec("-2"), &dec("3")).unwrap().to_text(), "-8");
        assert_eq!(pow(dec("-2"), &dec("4")).unwrap().to_text(), "16");
        assert_eq!(pow(dec("12345"), &dec("0")).unwrap().to_text(), "1");
        assert_eq!(pow(dec("0"), &dec("0")).unwrap().to_text(), "1");
        assert_eq!(pow(dec("0"), &dec("5")).unwrap().to_text(), "0");
        assert_eq!(pow(dec("7"), &dec("1")).unwrap().to_text(), "7");
        assert_eq!(pow(num("10", 2), &num("101", 2)).unwrap().to_text(), "100000");
        assert_eq!(pow(num("F", 16), &num("2", 16)).unwrap().to_text(), "E1");
        assert_eq!(pow(dec("2"), &dec("-1")), Err(BigNumError::NegativeExponent));
    }

    #[test]
    fn test_convert_radix() {
        assert_eq!(convert_radix(dec("255"), 16).unwrap().to_text(), "FF");
        assert_eq!(convert_radix(dec("255"), 2).unwrap().to_text(), "11111111");
        assert_eq!(convert_radix(num("FF", 16), 10).unwrap().to_text(), "255");
        assert_eq!(convert_radix(num("-FF", 16), 8).unwrap().to_text(), "-377");
        assert_eq!(convert_radix(dec("0"), 7).unwrap().to_text(), "0");
        assert_eq!(convert_radix(num("540263", 7), 12).unwrap().to_text(), "46332");
        assert_eq!(convert_radix(num("540263", 7), 10).unwrap().to_text(), "93782");

        let same = convert_radix(num("123", 5), 5).unwrap();
        assert_eq!((same.to_text(), same.radix()), ("123".to_string(), 5));

        assert_eq!(convert_radix(dec("1"), 17), Err(BigNumError::InvalidRadix(17)));
        assert_eq!(convert_radix(dec("1"), 1), Err(BigNumError::InvalidRadix(1)));
    }

    #[test]
    fn test_mismatched_radix() {
        let a = num("10", 2);
        let b = num("10", 10);
        for result in [
            add(a.clone(), &b),
            subtract(a.clone(), &b),
            multiply(a.clone(), &b),
            divide(a.clone(), &b),
            modulo(a.clone(), &b),
            pow(a.clone(), &b),
        ] {
            let err = result.unwrap_err();
            assert_eq!(err, BigNumError::BaseMismatch { left: 2, right: 10 });
            assert_eq!(err.kind(), ErrorKind::BaseMismatch);
        }
    }

    #[test]
    fn test_operator_traits() {
        let a = dec("100");
        let b = dec("-7");
        assert_eq!((a.clone() + &b).unwrap().to_text(), "93");
        assert_eq!((a.clone() - &b).unwrap().to_text(), "107");
        assert_eq!((a.clone() * &b).unwrap().to_text(), "-700");
        assert_eq!((a.clone() / &b).unwrap().to_text(), "-14");
        assert!((a % &b).is_err());
    }
}
