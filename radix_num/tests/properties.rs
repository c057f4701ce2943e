//! Algebraic properties of the arithmetic, checked over generated numerals in every radix.

use std::cmp::Ordering;

use radix_num::ops::{add, compare, convert_radix, divide, modulo, multiply, pow, subtract};
use radix_num::{BigNum, BigNumError, DIGITS};

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    fn numeral(&mut self, radix: u32, max_len: u64) -> String {
        let mut s = String::new();
        if self.below(2) == 0 {
            s.push('-');
        }
        let len = 1 + self.below(max_len);
        for _ in 0..len {
            s.push(DIGITS[self.below(radix as u64) as usize]);
        }
        s
    }

    fn non_negative(&mut self, radix: u32, max_len: u64) -> String {
        self.numeral(radix, max_len).trim_start_matches('-').to_string()
    }
}

fn num(s: &str, radix: u32) -> BigNum {
    BigNum::from_str_radix(s, radix).unwrap()
}

fn canonical(s: &str) -> String {
    let (neg, body) = match s.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let body = body.trim_start_matches('0');
    if body.is_empty() {
        "0".to_string()
    } else if neg {
        format!("-{}", body)
    } else {
        body.to_string()
    }
}

#[test]
fn text_round_trips_to_canonical_form() {
    let mut rng = Lcg(1);
    for radix in 2..=16 {
        for _ in 0..20 {
            let s = rng.numeral(radix, 30);
            assert_eq!(num(&s, radix).to_text(), canonical(&s), "radix {} numeral {}", radix, s);
        }
    }
    assert_eq!(num("+0007", 8).to_text(), "7");
}

#[test]
fn compare_is_antisymmetric() {
    let mut rng = Lcg(2);
    for radix in 2..=16 {
        for _ in 0..20 {
            let a = num(&rng.numeral(radix, 6), radix);
            let b = num(&rng.numeral(radix, 6), radix);
            let ab = compare(&a, &b).unwrap();
            let ba = compare(&b, &a).unwrap();
            assert_eq!(ab, ba.reverse(), "{} vs {}", a, b);
            assert_eq!(compare(&a, &a), Ok(Ordering::Equal));
        }
    }
}

#[test]
fn addition_identity_and_commutativity() {
    let mut rng = Lcg(3);
    for radix in 2..=16 {
        let zero = BigNum::zero(radix).unwrap();
        for _ in 0..20 {
            let a = num(&rng.numeral(radix, 25), radix);
            let b = num(&rng.numeral(radix, 25), radix);
            assert_eq!(add(a.clone(), &zero).unwrap(), a);
            let ab = add(a.clone(), &b).unwrap();
            let ba = add(b.clone(), &a).unwrap();
            assert_eq!(ab.to_text(), ba.to_text(), "{} + {}", a, b);
        }
    }
}

#[test]
fn subtraction_undoes_addition() {
    let mut rng = Lcg(4);
    for radix in 2..=16 {
        for _ in 0..20 {
            let a = num(&rng.numeral(radix, 25), radix);
            let b = num(&rng.numeral(radix, 25), radix);
            let sum = add(a.clone(), &b).unwrap();
            assert_eq!(subtract(sum, &b).unwrap(), a, "({} + {}) - {}", a, b, b);
        }
    }
}

#[test]
fn division_and_modulo_recompose_the_dividend() {
    let mut rng = Lcg(5);
    for radix in 2..=16 {
        for _ in 0..10 {
            let a = num(&rng.non_negative(radix, 15), radix);
            let b = num(&rng.non_negative(radix, 6), radix);
            if b.is_zero() {
                continue;
            }
            let q = divide(a.clone(), &b).unwrap();
            let r = modulo(a.clone(), &b).unwrap();
            assert!(!r.is_negative());
            assert_eq!(compare(&r, &b), Ok(Ordering::Less));
            let back = add(multiply(q, &b).unwrap(), &r).unwrap();
            assert_eq!(back, a, "radix {}: {} / {}", radix, a, b);
        }
    }
}

#[test]
fn radix_conversion_round_trips() {
    let mut rng = Lcg(6);
    for radix in 2..=16 {
        for _ in 0..4 {
            let a = num(&rng.numeral(radix, 12), radix);
            let target = 2 + rng.below(15) as u32;
            let there = convert_radix(a.clone(), target).unwrap();
            assert_eq!(there.radix(), target);
            let back = convert_radix(there, radix).unwrap();
            assert_eq!(back, a, "{} via radix {}", a, target);
        }
    }
}

#[test]
fn division_by_zero_is_reported() {
    let a = num("1F", 16);
    let zero = BigNum::zero(16).unwrap();
    assert_eq!(divide(a.clone(), &zero), Err(BigNumError::DivisionByZero));
    assert_eq!(a.to_text(), "1F");
    assert!(zero.is_zero());
}

#[test]
fn powers() {
    assert_eq!(pow(num("3", 10), &num("10", 10)).unwrap().to_text(), "59049");
    assert_eq!(pow(num("9", 10), &num("0", 10)).unwrap().to_text(), "1");
    assert_eq!(pow(num("0", 10), &num("17", 10)).unwrap().to_text(), "0");
    let mut expected = num("1", 7);
    let base = num("-6", 7);
    for e in 0..12 {
        let exponent = convert_radix(BigNum::from(e), 7).unwrap();
        assert_eq!(pow(base.clone(), &exponent).unwrap(), expected, "exponent {}", e);
        expected = multiply(expected, &base).unwrap();
    }
}

#[test]
fn mixed_radix_scenario() {
    let a = num("123", 9);
    let b = convert_radix(BigNum::from(-125), 9).unwrap();
    assert_eq!(b.to_text(), "-148");
    let sum = add(a, &b).unwrap();
    let expected = convert_radix(BigNum::from(102 - 125), 9).unwrap();
    assert_eq!(sum, expected);
    assert_eq!(sum.to_text(), "-25");
}

#[test]
fn base_seven_to_base_twelve() {
    let converted = convert_radix(num("540263", 7), 12).unwrap();
    let expected = convert_radix(BigNum::from(93782), 12).unwrap();
    assert_eq!(converted, expected);
    assert_eq!(converted.to_text(), "46332");
}
