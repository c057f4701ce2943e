use lazy_static::*;

use crate::BigNum;
use crate::big_num_constants::*;

lazy_static! {
    /// Decimal values `0..=16`: every digit value and every supported radix.
    pub static ref DECIMAL_CACHE: [BigNum; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigNum::from(i));
}

#[test]
fn test_decimal_cache() {
    for (i, n) in DECIMAL_CACHE.iter().enumerate() {
        assert_eq!(n.radix(), DECIMAL_RADIX);
        assert_eq!(n.to_text(), i.to_string());
    }
}
