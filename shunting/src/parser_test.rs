use crate::lexer::RatToken;
use crate::parser::{ParseError, ShuntingParser};

fn lit(s: &str) -> RatToken {
    RatToken::Literal(s.to_string())
}

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3 + 4 * 2").unwrap();
    let expect = [
        lit("3"),
        lit("4"),
        lit("2"),
        RatToken::BOp('*'),
        RatToken::BOp('+'),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("( 1 + 2 ) * 3").unwrap();
    let expect = [
        lit("1"),
        lit("2"),
        RatToken::BOp('+'),
        lit("3"),
        RatToken::BOp('*'),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn left_to_right() {
    let rpn = ShuntingParser::parse_str("8 - 3 - 1 / 2 * 1/4").unwrap();
    assert_eq!(rpn.to_string(), "8 3 - 1 2 / 1/4 * -");
    let rpn = ShuntingParser::parse_str("1 / 3 + 1 / 6").unwrap();
    assert_eq!(rpn.to_string(), "1 3 / 1 6 / +");
}

#[test]
fn nested_parens() {
    let rpn = ShuntingParser::parse_str("2 * ( ( 1 - 1/2 ) / ( 3 + 1 ) )").unwrap();
    assert_eq!(rpn.to_string(), "2 1 1/2 - 3 1 + / *");
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("( 1 + 2 ) ) * 3");
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str(") 1");
    assert_eq!(rpn, Err(ParseError::MissingOParen));

    let rpn = ShuntingParser::parse_str("( ( 1 + 2 ) * 3");
    assert_eq!(rpn, Err(ParseError::MissingCParen));
}

#[test]
fn operators_only_are_left_to_eval() {
    // the parser does not count operands
    let rpn = ShuntingParser::parse_str("1 + + 2").unwrap();
    assert_eq!(rpn.to_string(), "1 + 2 +");
}
