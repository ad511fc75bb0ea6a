//! Integration tests for termpoly.

#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn pairs<'a>(terms: impl IntoIterator<Item = &'a Term>) -> Vec<(f64, i32)> {
        terms
            .into_iter()
            .map(|t| (t.coefficient(), t.exponent()))
            .collect()
    }

    #[test]
    fn test_cancelling_sum() {
        init_logging();

        let p = Polynomial::from([Term::new(2.0, 0), Term::new(3.0, 1)]);
        let q = Polynomial::from([Term::new(-3.0, 1), Term::new(5.0, 2)]);

        let sum = &p + &q;
        assert_eq!(pairs(&sum), vec![(2.0, 0), (5.0, 2)]);
        assert_eq!(sum, &q + &p);
    }

    #[test]
    fn test_self_difference() {
        init_logging();

        let p = Polynomial::from([Term::new(1.0, 5)]);
        let diff = &p - &p;

        assert!(diff.is_empty());
        assert_eq!(&p + &diff, p);
    }

    #[test]
    fn test_fixed_and_dynamic_agree() {
        const P: FixedPolynomial<3> =
            FixedPolynomial::new([Term::new(1.0, 2), Term::new(1.0, 0), Term::new(4.0, 1)]);
        const Q: FixedPolynomial<2> = FixedPolynomial::new([Term::new(-4.0, 1), Term::new(1.0, 3)]);

        let len = P.merged_len(&Q);
        assert_eq!(len, 3);

        let fixed: FixedPolynomial<3> = P.add(&Q).unwrap();
        let dynamic = P.to_polynomial() + Q.to_polynomial();

        assert_eq!(pairs(&fixed), pairs(&dynamic));
        assert_eq!(fixed.evaluate_at(2.0), dynamic.evaluate_at(2.0));
    }

    #[test]
    fn test_fixed_wrong_capacity() {
        let p = FixedPolynomial::new([Term::new(1.0, 0)]);
        let q = FixedPolynomial::new([Term::new(1.0, 1)]);

        let result = p.add::<1, 1>(&q);
        assert!(matches!(
            result,
            Err(PolyError::CapacityMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_term_mismatch_error_message() {
        let err = Term::new(1.0, 1).add(&Term::new(1.0, 2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "exponent mismatch: cannot combine x^1 with x^2"
        );
    }

    #[test]
    fn test_evaluation_modes() {
        let p = Polynomial::from([Term::new(3.0, 2)]);

        assert_eq!(p.evaluate(2.0, EvalMode::Power), 12.0);
        assert_eq!(p.evaluate(2.0, EvalMode::RepeatedSquaring), 48.0);
    }

    #[test]
    fn test_descending_display() {
        let mut p: Polynomial = [Term::new(1.0, 0), Term::new(-2.0, 3)].into_iter().collect();
        p.sort(TermOrder::Descending);

        assert_eq!(
            p.render(&FormatOptions::new(1, 5)),
            " -2.0x^3   1.0x^0 "
        );
    }
}
