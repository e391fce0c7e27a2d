use std::fmt;
use std::ops;
use std::str::FromStr;

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Zero};

use crate::error::RationalError;
use crate::operand::Operand;

/// An exact fraction `n/d`.
///
/// Every value is kept in lowest terms with the sign carried by the
/// numerator, so `d > 0` and `gcd(|n|, d) == 1` hold after construction
/// and after every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    n: i64,
    d: i64,
}

/// One of the two fields of a [`Rational`], addressed by its symbolic key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Numer,
    Denom,
}

impl FromStr for Field {
    type Err = RationalError;
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "n" => Ok(Field::Numer),
            "d" => Ok(Field::Denom),
            other => Err(RationalError::InvalidKey(other.to_string())),
        }
    }
}

// Products of two i64 fit in i128, so all arithmetic happens there and
// only the reduced result has to come back down to i64.
fn reduce(n: i128, d: i128) -> Result<Rational, RationalError> {
    if d.is_zero() {
        return Err(RationalError::DivisionByZero);
    }
    // d != 0 so g >= 1
    let g = n.gcd(&d);
    let (mut n, mut d) = (n / g, d / g);
    if d < 0 {
        n = -n;
        d = -d;
    }
    match (i64::try_from(n), i64::try_from(d)) {
        (Ok(n), Ok(d)) => Ok(Rational { n, d }),
        _ => Err(RationalError::Overflow),
    }
}

fn mul(a: i128, b: i128) -> Result<i128, RationalError> {
    CheckedMul::checked_mul(&a, &b).ok_or(RationalError::Overflow)
}

impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, RationalError> {
        reduce(numerator as i128, denominator as i128)
    }

    pub fn from_integer(n: i64) -> Rational {
        Rational { n, d: 1 }
    }

    pub fn numer(&self) -> i64 {
        self.n
    }

    pub fn denom(&self) -> i64 {
        self.d
    }

    /// Replace the numerator and reduce again. `self` is left untouched on error.
    pub fn set_numer(&mut self, n: i64) -> Result<(), RationalError> {
        *self = reduce(n as i128, self.d as i128)?;
        Ok(())
    }

    /// Replace the denominator and reduce again. A zero denominator is
    /// rejected and `self` keeps its previous value.
    pub fn set_denom(&mut self, d: i64) -> Result<(), RationalError> {
        if d == 0 {
            return Err(RationalError::DivisionByZero);
        }
        *self = reduce(self.n as i128, d as i128)?;
        Ok(())
    }

    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Numer => self.numer(),
            Field::Denom => self.denom(),
        }
    }

    pub fn set(&mut self, field: Field, value: i64) -> Result<(), RationalError> {
        match field {
            Field::Numer => self.set_numer(value),
            Field::Denom => self.set_denom(value),
        }
    }

    fn wide(&self) -> (i128, i128) {
        (self.n as i128, self.d as i128)
    }

    pub fn checked_add(&self, rhs: impl Into<Operand>) -> Result<Rational, RationalError> {
        let ((an, ad), (bn, bd)) = (self.wide(), rhs.into().into_rational().wide());
        let n = CheckedAdd::checked_add(&mul(an, bd)?, &mul(bn, ad)?)
            .ok_or(RationalError::Overflow)?;
        reduce(n, mul(ad, bd)?)
    }

    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> Result<Rational, RationalError> {
        let ((an, ad), (bn, bd)) = (self.wide(), rhs.into().into_rational().wide());
        let n = CheckedSub::checked_sub(&mul(an, bd)?, &mul(bn, ad)?)
            .ok_or(RationalError::Overflow)?;
        reduce(n, mul(ad, bd)?)
    }

    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> Result<Rational, RationalError> {
        let ((an, ad), (bn, bd)) = (self.wide(), rhs.into().into_rational().wide());
        reduce(mul(an, bn)?, mul(ad, bd)?)
    }

    pub fn checked_div(&self, rhs: impl Into<Operand>) -> Result<Rational, RationalError> {
        let ((an, ad), (bn, bd)) = (self.wide(), rhs.into().into_rational().wide());
        if bn.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        reduce(mul(an, bd)?, mul(ad, bn)?)
    }

    /// `lhs - self`, for when the plain integer sits on the left.
    pub fn checked_rsub(&self, lhs: impl Into<Operand>) -> Result<Rational, RationalError> {
        lhs.into().into_rational().checked_sub(*self)
    }

    /// `lhs / self`, for when the plain integer sits on the left.
    pub fn checked_rdiv(&self, lhs: impl Into<Operand>) -> Result<Rational, RationalError> {
        lhs.into().into_rational().checked_div(*self)
    }

    pub fn to_f64(&self) -> f64 {
        self.n as f64 / self.d as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_integer(0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

pub(crate) fn parse_int(part: &str) -> Result<i64, RationalError> {
    part.trim()
        .parse::<i64>()
        .map_err(|source| RationalError::ParseError {
            token: part.to_string(),
            source,
        })
}

impl FromStr for Rational {
    type Err = RationalError;
    /// Accepts `"a"` or `"a/b"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split('/').collect::<Vec<&str>>();
        match parts[..] {
            [n] => Ok(Rational::from_integer(parse_int(n)?)),
            [n, d] => Rational::new(parse_int(n)?, parse_int(d)?),
            _ => Err(RationalError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.d == 1 {
            write!(f, "{}", self.n)
        } else {
            write!(f, "{}/{}", self.n, self.d)
        }
    }
}

// Operators can fail (zero divisor, overflow) so they all yield a Result.
macro_rules! rational_binop {
    ($op:ident, $method:ident, $checked:ident, $rchecked:ident) => {
        impl<T: Into<Operand>> ops::$op<T> for Rational {
            type Output = Result<Rational, RationalError>;
            fn $method(self, rhs: T) -> Self::Output {
                self.$checked(rhs)
            }
        }

        impl ops::$op<Rational> for i64 {
            type Output = Result<Rational, RationalError>;
            fn $method(self, rhs: Rational) -> Self::Output {
                rhs.$rchecked(self)
            }
        }
    };
}

rational_binop!(Add, add, checked_add, checked_add);
rational_binop!(Sub, sub, checked_sub, checked_rsub);
rational_binop!(Mul, mul, checked_mul, checked_mul);
rational_binop!(Div, div, checked_div, checked_rdiv);
