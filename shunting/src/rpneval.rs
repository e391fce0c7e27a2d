use rational::{Operand, Rational, RationalError};
use thiserror::Error;

use crate::lexer::RatToken;
use crate::parser::{ParseError, RPNExpr, ShuntingParser};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalErr {
    #[error("stack underflow: '{0}' needs two operands")]
    StackUnderflow(char),
    #[error("invalid expression: {0} values left on the stack")]
    InvalidExpression(usize),
    #[error("unexpected token in postfix: '{0}'")]
    BadToken(String),
    #[error(transparent)]
    Rational(#[from] RationalError),
}

/// Anything that went wrong while turning one line of text into a value.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvaluationError {
    #[error("Error evaluating expression: {0}")]
    Parse(#[from] ParseError),
    #[error("Error evaluating expression: {0}")]
    Eval(#[from] EvalErr),
}

fn apply(op: char, lhs: Rational, rhs: Rational) -> Result<Rational, EvalErr> {
    let value = match op {
        '+' => lhs.checked_add(rhs),
        '-' => lhs.checked_sub(rhs),
        '*' => lhs.checked_mul(rhs),
        '/' => lhs.checked_div(rhs),
        _ => return Err(EvalErr::BadToken(op.to_string())),
    };
    Ok(value?)
}

pub fn eval(rpn: &RPNExpr) -> Result<Rational, EvalErr> {
    let mut operands = Vec::new();

    for token in rpn.iter() {
        match *token {
            RatToken::Literal(ref lexeme) => {
                operands.push(lexeme.parse::<Operand>()?.into_rational())
            }
            RatToken::BOp(op) => {
                let r = operands.pop().ok_or(EvalErr::StackUnderflow(op))?;
                let l = operands.pop().ok_or(EvalErr::StackUnderflow(op))?;
                operands.push(apply(op, l, r)?);
            }
            _ => return Err(EvalErr::BadToken(token.to_string())),
        }
    }
    match (operands.pop(), operands.len()) {
        (Some(result), 0) => Ok(result),
        (None, _) => Err(EvalErr::InvalidExpression(0)),
        (Some(_), rest) => Err(EvalErr::InvalidExpression(rest + 1)),
    }
}

/// Tokenize, convert to postfix and evaluate a single infix line.
pub fn evaluate_expression(expr: &str) -> Result<Rational, EvaluationError> {
    let rpn = ShuntingParser::parse_str(expr)?;
    tracing::debug!(%expr, postfix = %rpn, "parsed");
    let value = eval(&rpn)?;
    tracing::debug!(%expr, %value, "evaluated");
    Ok(value)
}
