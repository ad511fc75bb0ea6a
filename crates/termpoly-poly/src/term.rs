//! Single polynomial terms.
//!
//! A [`Term`] is a `coefficient * x^exponent` pair. Its identity is the
//! exponent alone: two terms with the same exponent compare equal no
//! matter their coefficients, which is what sorting and merging need.

use std::cmp::Ordering;

use crate::error::{PolyError, Result};
use crate::eval::EvalMode;

/// A monomial `coefficient * x^exponent`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Term {
    coefficient: f64,
    exponent: i32,
}

impl Term {
    /// The canonical zero term `0 * x^0`.
    pub const ZERO: Term = Term::new(0.0, 0);

    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Sets the coefficient.
    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient;
    }

    /// Sets the exponent.
    pub fn set_exponent(&mut self, exponent: i32) {
        self.exponent = exponent;
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Returns true if both coefficient and exponent match.
    ///
    /// `==` only looks at the exponent.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_as(&self, other: &Self) -> bool {
        self.exponent == other.exponent && self.coefficient == other.coefficient
    }

    /// Adds two terms with the same exponent.
    ///
    /// A sum of exactly zero collapses to [`Term::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidOperand`] if the exponents differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.exponent != other.exponent {
            return Err(PolyError::InvalidOperand {
                lhs: self.exponent,
                rhs: other.exponent,
            });
        }

        let sum = self.coefficient + other.coefficient;
        if sum == 0.0 {
            Ok(Self::ZERO)
        } else {
            Ok(Self::new(sum, self.exponent))
        }
    }

    /// Subtracts a term with the same exponent.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidOperand`] if the exponents differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }

    /// Evaluates the term at `x` under the given policy.
    #[must_use]
    pub fn evaluate(&self, x: f64, mode: EvalMode) -> f64 {
        self.coefficient * mode.raise(x, self.exponent)
    }

    /// Evaluates the term at `x` with the default policy.
    #[must_use]
    pub fn evaluate_at(&self, x: f64) -> f64 {
        self.evaluate(x, EvalMode::default())
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent
    }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exponent.cmp(&other.exponent)
    }
}

impl std::ops::Neg for Term {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Term::neg(&self)
    }
}

impl From<(f64, i32)> for Term {
    fn from((coefficient, exponent): (f64, i32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x^{}", self.coefficient, self.exponent)
    }
}
