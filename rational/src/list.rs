use std::fmt;
use std::ops;

use crate::error::RationalError;
use crate::operand::Operand;
use crate::rational::Rational;

/// An ordered collection of fractions. Plain integers and fraction
/// strings are converted to [`Rational`] on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RationalList(Vec<Rational>);

impl RationalList {
    pub fn new() -> Self {
        RationalList(Vec::new())
    }

    pub fn push(&mut self, item: impl Into<Operand>) {
        self.0.push(item.into().into_rational());
    }

    /// Parse `token` as `"a"` or `"a/b"` and append it. Nothing is
    /// appended if parsing fails.
    pub fn push_str(&mut self, token: &str) -> Result<(), RationalError> {
        self.0.push(token.parse::<Rational>()?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rational> {
        self.0.get(index)
    }

    /// Overwrite the element at `index`, returning the old one, or `None`
    /// (and no change) when `index` is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<Operand>) -> Option<Rational> {
        let slot = self.0.get_mut(index)?;
        Some(std::mem::replace(slot, value.into().into_rational()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rational> {
        self.0.iter()
    }

    /// Exact sum of all elements, `0` for an empty list.
    pub fn sum(&self) -> Result<Rational, RationalError> {
        self.0
            .iter()
            .try_fold(Rational::default(), |total, item| total.checked_add(item))
    }
}

impl ops::Index<usize> for RationalList {
    type Output = Rational;
    fn index(&self, index: usize) -> &Rational {
        &self.0[index]
    }
}

impl ops::Add<RationalList> for RationalList {
    type Output = RationalList;
    fn add(mut self, rhs: RationalList) -> RationalList {
        self += rhs;
        self
    }
}

impl ops::Add<Rational> for RationalList {
    type Output = RationalList;
    fn add(mut self, rhs: Rational) -> RationalList {
        self += rhs;
        self
    }
}

impl ops::AddAssign<RationalList> for RationalList {
    fn add_assign(&mut self, rhs: RationalList) {
        self.0.extend(rhs.0);
    }
}

impl ops::AddAssign<Rational> for RationalList {
    fn add_assign(&mut self, rhs: Rational) {
        self.push(rhs);
    }
}

impl ops::AddAssign<i64> for RationalList {
    fn add_assign(&mut self, rhs: i64) {
        self.push(rhs);
    }
}

impl FromIterator<Rational> for RationalList {
    fn from_iter<I: IntoIterator<Item = Rational>>(iter: I) -> Self {
        RationalList(iter.into_iter().collect())
    }
}

impl Extend<Rational> for RationalList {
    fn extend<I: IntoIterator<Item = Rational>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for RationalList {
    type Item = Rational;
    type IntoIter = std::vec::IntoIter<Rational>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RationalList {
    type Item = &'a Rational;
    type IntoIter = std::slice::Iter<'a, Rational>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RationalList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let items = self
            .0
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", items)
    }
}
