//! # termpoly-poly
//!
//! Univariate polynomial containers over `f64` coefficients.
//!
//! This crate provides:
//! - [`Term`]: a `coefficient * x^exponent` pair ordered by exponent
//! - [`Polynomial`]: a growable, sorted term sequence
//! - [`FixedPolynomial`]: an inline `[Term; N]` variant usable in `const` items
//!
//! ## Canonical Form
//!
//! Addition, subtraction and insertion all route through one
//! canonicalization step, so their results are sorted, carry at most
//! one term per exponent and never hold a zero coefficient. Plain
//! construction only sorts.
//!
//! ## Evaluation
//!
//! [`EvalMode::Power`] (the default) computes `x^exponent`.
//! [`EvalMode::RepeatedSquaring`] reproduces the older `x^(2^exponent)`
//! evaluator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod eval;
pub mod fixed;
pub mod format;
pub mod merge;
pub mod ordering;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use eval::EvalMode;
pub use fixed::FixedPolynomial;
pub use format::FormatOptions;
pub use ordering::TermOrder;
pub use polynomial::Polynomial;
pub use term::Term;
