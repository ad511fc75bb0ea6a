//! Fixed-capacity polynomials.
//!
//! [`FixedPolynomial<N>`] stores exactly `N` terms inline and can be built
//! in a `const` item:
//!
//! ```
//! use termpoly_poly::{FixedPolynomial, Term};
//!
//! const P: FixedPolynomial<2> = FixedPolynomial::new([Term::new(1.0, 3), Term::new(2.0, 0)]);
//! assert_eq!(P[0].exponent(), 0);
//! ```
//!
//! Addition writes the merged terms by index into a result whose
//! capacity the caller names. [`FixedPolynomial::merged_len`] gives the
//! exact length to use.

use std::io;
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::error::{PolyError, Result};
use crate::eval::EvalMode;
use crate::format::FormatOptions;
use crate::merge::{merge, sorted_view, LenCounter, SlotWriter};
use crate::ordering::TermOrder;
use crate::polynomial::Polynomial;
use crate::term::Term;

/// A polynomial with exactly `N` terms in ascending exponent order.
///
/// Construction sorts but keeps repeated exponents and zero coefficients.
#[derive(Clone, Copy, Debug)]
pub struct FixedPolynomial<const N: usize> {
    terms: [Term; N],
}

impl<const N: usize> FixedPolynomial<N> {
    /// Creates a polynomial, sorting the terms by ascending exponent.
    ///
    /// The sort is a stable insertion sort usable in `const` context.
    #[must_use]
    pub const fn new(terms: [Term; N]) -> Self {
        let mut terms = terms;
        let mut i = 1;
        while i < N {
            let mut j = i;
            while j > 0 && terms[j - 1].exponent() > terms[j].exponent() {
                let tmp = terms[j];
                terms[j] = terms[j - 1];
                terms[j - 1] = tmp;
                j -= 1;
            }
            i += 1;
        }
        Self { terms }
    }

    /// Returns the number of terms.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the capacity is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the terms.
    #[must_use]
    pub const fn terms(&self) -> &[Term; N] {
        &self.terms
    }

    /// Returns an iterator over the terms.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Re-sorts by ascending exponent, e.g. after editing through `IndexMut`.
    pub fn sort(&mut self) {
        self.terms.sort_by(|a, b| TermOrder::Ascending.compare(a, b));
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.map(|t| t.neg()),
        }
    }

    /// Returns the number of terms `self + other` produces.
    #[must_use]
    pub fn merged_len<const M: usize>(&self, other: &FixedPolynomial<M>) -> usize {
        let lhs = sorted_view(&self.terms, TermOrder::Ascending);
        let rhs = sorted_view(&other.terms, TermOrder::Ascending);

        let mut counter = LenCounter::default();
        merge(&lhs, &rhs, TermOrder::Ascending, &mut counter);
        counter.len()
    }

    /// Adds two polynomials into a result of capacity `R`.
    ///
    /// The result is canonical: sorted, unique exponents, no zeros.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CapacityMismatch`] unless `R` equals
    /// [`FixedPolynomial::merged_len`].
    pub fn add<const M: usize, const R: usize>(
        &self,
        other: &FixedPolynomial<M>,
    ) -> Result<FixedPolynomial<R>> {
        let expected = self.merged_len(other);
        if expected != R {
            debug!(expected, actual = R, "fixed-size sum capacity mismatch");
            return Err(PolyError::CapacityMismatch {
                expected,
                actual: R,
            });
        }

        let lhs = sorted_view(&self.terms, TermOrder::Ascending);
        let rhs = sorted_view(&other.terms, TermOrder::Ascending);

        let mut terms = [Term::ZERO; R];
        let mut writer = SlotWriter::new(&mut terms);
        merge(&lhs, &rhs, TermOrder::Ascending, &mut writer);
        debug_assert_eq!(writer.len(), R);

        Ok(FixedPolynomial { terms })
    }

    /// Subtracts two polynomials into a result of capacity `R`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CapacityMismatch`] unless `R` equals the
    /// number of terms the difference produces.
    pub fn sub<const M: usize, const R: usize>(
        &self,
        other: &FixedPolynomial<M>,
    ) -> Result<FixedPolynomial<R>> {
        self.add(&other.neg())
    }

    /// Converts to a dynamically sized polynomial with the same terms.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        Polynomial::from(self.terms)
    }

    /// Evaluates the polynomial at `x` under the given policy.
    #[must_use]
    pub fn evaluate(&self, x: f64, mode: EvalMode) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x, mode)).sum()
    }

    /// Evaluates the polynomial at `x` with the default policy.
    #[must_use]
    pub fn evaluate_at(&self, x: f64) -> f64 {
        self.evaluate(x, EvalMode::default())
    }

    /// Renders the terms on one line.
    #[must_use]
    pub fn render(&self, options: &FormatOptions) -> String {
        options.render(&self.terms)
    }

    /// Writes the terms followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`.
    pub fn write_to<W: io::Write>(
        &self,
        writer: &mut W,
        options: &FormatOptions,
    ) -> io::Result<()> {
        options.write_line(writer, &self.terms)
    }

    /// Prints the terms to standard output.
    ///
    /// # Errors
    ///
    /// Propagates any error writing to standard output.
    pub fn print(&self, options: &FormatOptions) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), options)
    }
}

impl<const N: usize> Index<usize> for FixedPolynomial<N> {
    type Output = Term;

    fn index(&self, index: usize) -> &Self::Output {
        &self.terms[index]
    }
}

impl<const N: usize> IndexMut<usize> for FixedPolynomial<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.terms[index]
    }
}

impl<const N: usize> From<[Term; N]> for FixedPolynomial<N> {
    fn from(terms: [Term; N]) -> Self {
        Self::new(terms)
    }
}

impl<const N: usize> TryFrom<&[Term]> for FixedPolynomial<N> {
    type Error = PolyError;

    fn try_from(terms: &[Term]) -> Result<Self> {
        let terms: [Term; N] = terms
            .try_into()
            .map_err(|_| PolyError::CapacityMismatch {
                expected: terms.len(),
                actual: N,
            })?;
        Ok(Self::new(terms))
    }
}

impl<const N: usize> From<FixedPolynomial<N>> for Polynomial {
    fn from(poly: FixedPolynomial<N>) -> Self {
        poly.to_polynomial()
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedPolynomial<M>> for FixedPolynomial<N> {
    fn eq(&self, other: &FixedPolynomial<M>) -> bool {
        N == M
            && self
                .terms
                .iter()
                .zip(&other.terms)
                .all(|(a, b)| a.same_as(b))
    }
}

impl<'a, const N: usize> IntoIterator for &'a FixedPolynomial<N> {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<const N: usize> std::fmt::Display for FixedPolynomial<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&FormatOptions::default()))
    }
}
