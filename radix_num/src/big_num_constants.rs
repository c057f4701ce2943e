/// Digit alphabet shared by parsing and printing. Index = digit value.
pub const DIGITS: [char; 16] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'A' , 'B' ,
    'C' , 'D' , 'E' , 'F'
];

/// Marks a character that is not part of [`DIGITS`].
pub const INVALID_DIGIT: u8 = u8::MAX;

/// Reverse of [`DIGITS`], indexed by ASCII code.
pub const DIGIT_VALUES: [u8; 128] = {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0;
    while i < DIGITS.len() {
        table[DIGITS[i] as usize] = i as u8;
        i += 1;
    }
    table
};

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 16;

pub const DECIMAL_RADIX: u32 = 10;

/// Largest value kept in the decimal constant cache, enough for every radix and digit.
pub const MAX_CONSTANT: usize = 16;

/// Maps a character onto its digit value, [`INVALID_DIGIT`] when it has none.
pub fn digit_value(c: char) -> u8 {
    if c.is_ascii() {
        DIGIT_VALUES[c as usize]
    } else {
        INVALID_DIGIT
    }
}

pub fn is_valid_radix(radix: u32) -> bool {
    (MIN_RADIX..=MAX_RADIX).contains(&radix)
}
