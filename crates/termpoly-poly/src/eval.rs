//! Evaluation policies for terms and polynomials.

/// How `x^exponent` is computed when a term is evaluated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EvalMode {
    /// True integer power: `coefficient * x.powi(exponent)`.
    ///
    /// Negative exponents evaluate to reciprocals.
    #[default]
    Power,

    /// Squares `x` once per unit of exponent, giving `x^(2^exponent)`.
    ///
    /// Kept for compatibility with data produced by older evaluators.
    /// Exponents `<= 0` perform no squaring, so the term evaluates to
    /// `coefficient * x`.
    RepeatedSquaring,
}

impl EvalMode {
    /// Raises `x` to `exponent` under this policy.
    #[must_use]
    pub fn raise(&self, x: f64, exponent: i32) -> f64 {
        match self {
            EvalMode::Power => x.powi(exponent),
            EvalMode::RepeatedSquaring => {
                let mut acc = x;
                for _ in 0..exponent {
                    acc *= acc;
                    // 0, 1, inf and NaN are fixed points of squaring
                    if acc == 0.0 || acc == 1.0 || !acc.is_finite() {
                        break;
                    }
                }
                acc
            }
        }
    }
}
