mod error;
mod list;
mod operand;
mod rational;

pub use error::RationalError;
pub use list::RationalList;
pub use operand::Operand;
pub use rational::{Field, Rational};

#[cfg(test)]
mod rational_test;
