//! # termpoly
//!
//! Sorted-term polynomial arithmetic over `f64` coefficients.
//!
//! Polynomials are kept as ordered `(coefficient, exponent)` sequences.
//! Addition is a linear-time merge that keeps results canonical, and a
//! fixed-capacity variant can be built at compile time.
//!
//! ## Quick Start
//!
//! ```rust
//! use termpoly::prelude::*;
//!
//! let p = Polynomial::from([Term::new(2.0, 0), Term::new(3.0, 1)]);
//! let q = Polynomial::from([Term::new(-3.0, 1), Term::new(5.0, 2)]);
//!
//! let sum = &p + &q;
//! assert_eq!(sum.len(), 2);
//! assert_eq!(sum.evaluate_at(2.0), 22.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use termpoly_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use termpoly_poly::{
        EvalMode, FixedPolynomial, FormatOptions, PolyError, Polynomial, Term, TermOrder,
    };
}

#[cfg(test)]
mod tests;
