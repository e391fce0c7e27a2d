use std::fmt;
use std::ops::Deref;

use thiserror::Error;

use crate::lexer::{RatToken, RatTokenizer};

#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParseError {
    #[error("stack underflow: unmatched ')'")]
    MissingOParen,
    #[error("unmatched '('")]
    MissingCParen,
}

// Equal precedence pops the stack, so equal-precedence operators
// evaluate left to right.
pub fn precedence(token: &RatToken) -> usize {
    match *token {
        RatToken::BOp('+') | RatToken::BOp('-') => 1,
        RatToken::BOp('*') | RatToken::BOp('/') => 2,
        _ => 0, // keep OParen at bottom
    }
}

/// An expression in postfix (reverse polish) order.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<RatToken>);

impl Deref for RPNExpr {
    type Target = [RatToken];
    fn deref(&self) -> &[RatToken] {
        &self.0
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self
            .0
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", tokens)
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut RatTokenizer::new(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = RatToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                RatToken::Literal(_) => out.push(token),
                RatToken::OParen => stack.push(token),
                RatToken::CParen => loop {
                    match stack.pop() {
                        Some(RatToken::OParen) => break,
                        Some(op) => out.push(op),
                        None => return Err(ParseError::MissingOParen),
                    }
                },
                RatToken::BOp(_) => {
                    let prec = precedence(&token);
                    while let Some(top) = stack.pop() {
                        if precedence(&top) < prec {
                            stack.push(top);
                            break;
                        }
                        out.push(top);
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                RatToken::OParen => return Err(ParseError::MissingCParen),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
