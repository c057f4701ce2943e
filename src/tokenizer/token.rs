/// Classes a whitespace separated word of an input line can fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineTokenType {
    /// One of `+ - * / ^ %`.
    Operator,
    /// Optional sign followed by digits `0-9A-F`. Whether the digits fit a radix is decided later.
    Numeral,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<TokenType> {
    pub val: String,
    pub ty: TokenType,
}

impl<TokenType> Token<TokenType> {
    pub fn new(val: String, ty: TokenType) -> Token<TokenType> {
        Token { val, ty }
    }
}
