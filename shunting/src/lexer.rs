use std::fmt;
use std::str::SplitWhitespace;

#[derive(Clone, PartialEq, Debug)]
pub enum RatToken {
    Literal(String), // parsed as a Rational at eval time
    BOp(char),
    OParen,
    CParen,
}

impl RatToken {
    fn from_word(word: &str) -> RatToken {
        match word {
            "(" => RatToken::OParen,
            ")" => RatToken::CParen,
            "+" => RatToken::BOp('+'),
            "-" => RatToken::BOp('-'),
            "*" => RatToken::BOp('*'),
            "/" => RatToken::BOp('/'),
            _ => RatToken::Literal(word.to_string()),
        }
    }
}

impl fmt::Display for RatToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RatToken::Literal(lexeme) => write!(f, "{}", lexeme),
            RatToken::BOp(op) => write!(f, "{}", op),
            RatToken::OParen => write!(f, "("),
            RatToken::CParen => write!(f, ")"),
        }
    }
}

// Tokens must already be separated by whitespace: "1/2" is a literal,
// "1 / 2" is a division.
pub struct RatTokenizer<'a> {
    words: SplitWhitespace<'a>,
}

impl<'a> RatTokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        RatTokenizer {
            words: source.split_whitespace(),
        }
    }
}

impl Iterator for RatTokenizer<'_> {
    type Item = RatToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.words.next().map(RatToken::from_word)
    }
}

///////////////////////////////////////////////////////////////////////////////
