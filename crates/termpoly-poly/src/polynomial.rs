//! Dynamically sized polynomials.
//!
//! A [`Polynomial`] owns a sequence of [`Term`]s kept sorted under its
//! [`TermOrder`]. Construction only sorts; [`Polynomial::insert`],
//! [`Polynomial::add`], [`Polynomial::sub`] and
//! [`Polynomial::normalize`] additionally keep exponents unique and drop
//! zero coefficients.

use std::cmp::Ordering;
use std::io;

use num_traits::Zero;
use tracing::debug;

use crate::eval::EvalMode;
use crate::format::FormatOptions;
use crate::merge::{canonicalize, fold, merge, sorted_view, Fold};
use crate::ordering::TermOrder;
use crate::term::Term;

/// A univariate polynomial stored as a sorted sequence of terms.
#[derive(Clone, Debug, Default)]
pub struct Polynomial {
    /// Terms in sorted order (by `order`).
    terms: Vec<Term>,
    /// Ordering the terms are kept in.
    order: TermOrder,
}

impl Polynomial {
    /// Creates the empty polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polynomial from terms, sorted by ascending exponent.
    ///
    /// Equal exponents and zero coefficients are kept as given.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut poly = Self {
            terms: terms.into_iter().collect(),
            order: TermOrder::Ascending,
        };
        poly.sort(TermOrder::Ascending);
        poly
    }

    /// Creates a canonical polynomial: sorted, unique exponents, no zeros.
    #[must_use]
    pub fn canonical<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut poly = Self::from_terms(terms);
        poly.normalize();
        poly
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the ordering the terms are kept in.
    #[must_use]
    pub fn order(&self) -> TermOrder {
        self.order
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Consumes the polynomial, returning its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Returns an iterator over the terms.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns a mutable iterator over the terms.
    ///
    /// Changing exponents through this iterator may break the ordering;
    /// call [`Polynomial::sort`] or [`Polynomial::normalize`] afterwards.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Term> {
        self.terms.iter_mut()
    }

    /// Returns the term with the highest exponent.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.iter().max()
    }

    /// Returns the highest exponent, or `None` for the empty polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<i32> {
        self.leading_term().map(Term::exponent)
    }

    /// Returns the summed coefficient of `x^exponent`.
    #[must_use]
    pub fn coefficient_of(&self, exponent: i32) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.exponent() == exponent)
            .map(Term::coefficient)
            .sum()
    }

    /// Re-orders the terms in place and records `order`.
    ///
    /// The sort is stable: terms sharing an exponent keep their relative
    /// position.
    pub fn sort(&mut self, order: TermOrder) {
        self.terms.sort_by(|a, b| order.compare(a, b));
        self.order = order;
    }

    /// Sorts and folds the terms into canonical form.
    pub fn normalize(&mut self) {
        self.sort(self.order);
        self.terms = canonicalize(&self.terms);
    }

    /// Inserts a term, keeping the sequence sorted and exponents unique.
    ///
    /// A term whose exponent is already present is summed into that slot,
    /// and the slot is removed if the sum is zero. A new exponent goes to
    /// its sorted position, which is the end if every present exponent
    /// comes first. Zero-coefficient terms never create a slot.
    ///
    /// A receiver that is not canonical (built by plain construction or
    /// edited through [`Polynomial::iter_mut`]) is normalized first.
    pub fn insert(&mut self, term: Term) {
        if !self.is_canonical() {
            debug!(len = self.terms.len(), "normalizing before insert");
            self.normalize();
        }

        let order = self.order;
        let found = self.terms.binary_search_by(|t| order.compare(t, &term));
        let existing = found.ok().map(|pos| &self.terms[pos]);

        match (fold(existing, term), found) {
            (Fold::Replace(t), Ok(pos)) => self.terms[pos] = t,
            (Fold::Remove, Ok(pos)) => {
                self.terms.remove(pos);
            }
            (Fold::Insert(t), Err(pos)) => self.terms.insert(pos, t),
            _ => {}
        }
    }

    /// Strictly sorted under `order` with no zero coefficients.
    fn is_canonical(&self) -> bool {
        self.terms
            .windows(2)
            .all(|w| self.order.compare(&w[0], &w[1]) == Ordering::Less)
            && !self.terms.iter().any(Term::is_zero)
    }

    /// Adds two polynomials with a linear-time sorted merge.
    ///
    /// The result uses `self`'s ordering and is canonical.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let lhs = sorted_view(&self.terms, self.order);
        let rhs = sorted_view(&other.terms, self.order);

        let mut terms = Vec::with_capacity(lhs.len() + rhs.len());
        merge(&lhs, &rhs, self.order, &mut terms);

        Self {
            terms,
            order: self.order,
        }
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::neg).collect(),
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
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

    /// Prints the terms to standard output, one line per polynomial.
    ///
    /// # Errors
    ///
    /// Propagates any error writing to standard output.
    pub fn print(&self, options: &FormatOptions) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), options)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .zip(&other.terms)
                .all(|(a, b)| a.same_as(b))
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&FormatOptions::default()))
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<&[Term]> for Polynomial {
    fn from(terms: &[Term]) -> Self {
        Self::from_terms(terms.iter().copied())
    }
}

impl<const N: usize> From<[Term; N]> for Polynomial {
    fn from(terms: [Term; N]) -> Self {
        Self::from_terms(terms)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<'a> IntoIterator for &'a mut Polynomial {
    type Item = &'a mut Term;
    type IntoIter = std::slice::IterMut<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter_mut()
    }
}

impl std::ops::Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl std::ops::Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(&self, rhs)
    }
}

impl std::ops::Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl std::ops::Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(&self, rhs)
    }
}

impl std::ops::Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl std::ops::AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = Polynomial::add(self, rhs);
    }
}

impl std::ops::SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self = Polynomial::sub(self, rhs);
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }
}
