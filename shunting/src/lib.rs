pub use lexer::{RatToken, RatTokenizer};
pub use parser::{ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{eval, evaluate_expression, EvalErr, EvaluationError};

pub mod batch;
pub mod lexer;
#[cfg(feature = "cli")]
pub mod logger;

pub mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;
