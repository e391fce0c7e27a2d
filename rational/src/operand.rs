use std::str::FromStr;

use crate::error::RationalError;
use crate::rational::{parse_int, Rational};

/// Anything the arithmetic operators accept on either side: a plain
/// integer or an exact fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Int(i64),
    Frac(Rational),
}

impl Operand {
    pub fn into_rational(self) -> Rational {
        match self {
            Operand::Int(n) => Rational::from_integer(n),
            Operand::Frac(r) => r,
        }
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<Rational> for Operand {
    fn from(r: Rational) -> Self {
        Operand::Frac(r)
    }
}

impl From<&Rational> for Operand {
    fn from(r: &Rational) -> Self {
        Operand::Frac(*r)
    }
}

impl From<Operand> for Rational {
    fn from(op: Operand) -> Self {
        op.into_rational()
    }
}

impl FromStr for Operand {
    type Err = RationalError;
    /// A literal holding a `/` is a fraction, anything else an integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            s.parse::<Rational>().map(Operand::Frac)
        } else {
            parse_int(s).map(Operand::Int)
        }
    }
}
