use serde::Deserialize;

use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as a double-precision number of dollars, exactly as
/// given in the catalogue. Rounding only happens in the [`Display`]
/// implementation, which formats it to 2 decimal places.
#[derive(Clone, Copy, Default, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Usd(f64);

impl Usd {
    #[must_use]
    pub fn new(dollars: f64) -> Self {
        Self(dollars)
    }

    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Usd {
    fn from(dollars: f64) -> Self {
        Self(dollars)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Usd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Usd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}
