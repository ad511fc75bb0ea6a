//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::merge::{merge, SlotWriter};
    use crate::{EvalMode, FixedPolynomial, PolyError, Polynomial, Term, TermOrder};

    // Small integer-valued coefficients keep sums exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    fn nonzero_coeff() -> impl Strategy<Value = f64> {
        prop_oneof![-20i32..0i32, 1i32..20i32].prop_map(f64::from)
    }

    fn small_term() -> impl Strategy<Value = Term> {
        (small_coeff(), 0i32..8i32).prop_map(|(c, e)| Term::new(c, e))
    }

    // Raw polynomials: may repeat exponents and hold zeros
    fn raw_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..8).prop_map(Polynomial::from)
    }

    fn canonical_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..8).prop_map(Polynomial::canonical)
    }

    // Sorted but otherwise raw: repeats and zeros survive
    fn sorted_terms() -> impl Strategy<Value = Vec<Term>> {
        proptest::collection::vec(small_term(), 0..8).prop_map(|mut v| {
            v.sort();
            v
        })
    }

    fn is_canonical(p: &Polynomial) -> bool {
        p.terms().windows(2).all(|w| w[0].exponent() < w[1].exponent())
            && p.iter().all(|t| !t.is_zero())
    }

    proptest! {
        #[test]
        fn add_is_canonical(a in raw_poly(), b in raw_poly()) {
            prop_assert!(is_canonical(&a.add(&b)));
        }

        #[test]
        fn add_commutative(a in raw_poly(), b in raw_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in canonical_poly(), b in canonical_poly(), c in canonical_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn add_identity(a in canonical_poly()) {
            let zero = Polynomial::new();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn sub_self_cancels(a in raw_poly()) {
            prop_assert!(a.sub(&a).is_empty());
        }

        #[test]
        fn add_sub_self_restores(a in canonical_poly()) {
            prop_assert_eq!(a.add(&a.sub(&a)), a);
        }

        #[test]
        fn insert_keeps_canonical(
            a in raw_poly(),
            terms in proptest::collection::vec(small_term(), 0..8),
        ) {
            let mut p = a;
            for t in terms {
                p.insert(t);
                prop_assert!(is_canonical(&p));
            }
        }

        #[test]
        fn insert_matches_add(a in raw_poly(), t in small_term()) {
            let mut inserted = a.clone();
            inserted.insert(t);
            prop_assert_eq!(inserted, a.add(&Polynomial::from([t])));
        }

        #[test]
        fn descending_add_matches_ascending(a in raw_poly(), b in raw_poly()) {
            let mut da = a.clone();
            da.sort(TermOrder::Descending);

            let mut expected = a.add(&b);
            expected.sort(TermOrder::Descending);
            prop_assert_eq!(da.add(&b), expected);
        }

        #[test]
        fn eval_add(a in raw_poly(), b in raw_poly(), x in -3i32..=3i32) {
            // (a + b)(x) = a(x) + b(x), exact for integer data
            let x = f64::from(x);
            let sum = a.add(&b);
            let split = a.evaluate(x, EvalMode::Power) + b.evaluate(x, EvalMode::Power);
            prop_assert_eq!(sum.evaluate(x, EvalMode::Power), split);
        }

        #[test]
        fn repeated_squaring_unit_points(
            t in small_term(),
            x in prop_oneof![Just(-1.0f64), Just(0.0f64), Just(1.0f64)],
        ) {
            // x^(2^e) with x in {-1, 0, 1} and e >= 1 is x*x
            prop_assume!(t.exponent() >= 1);
            let expected = t.coefficient() * x * x;
            prop_assert_eq!(t.evaluate(x, EvalMode::RepeatedSquaring), expected);
        }

        #[test]
        fn fixed_add_matches_dynamic(
            a in proptest::array::uniform4(small_term()),
            b in proptest::array::uniform3(small_term()),
        ) {
            let fa = FixedPolynomial::new(a);
            let fb = FixedPolynomial::new(b);

            let dynamic = fa.to_polynomial().add(&fb.to_polynomial());
            let len = fa.merged_len(&fb);
            prop_assert_eq!(len, dynamic.len());

            // Only a full-width sum fits seven slots
            match fa.add::<3, 7>(&fb) {
                Ok(sum) => {
                    prop_assert_eq!(len, 7);
                    prop_assert_eq!(Polynomial::from(sum), dynamic);
                }
                Err(err) => {
                    prop_assert_ne!(len, 7);
                    let expected = PolyError::CapacityMismatch { expected: len, actual: 7 };
                    prop_assert_eq!(err, expected);
                }
            }
        }

        #[test]
        fn fixed_add_interleaved(
            a in proptest::array::uniform4(nonzero_coeff()),
            b in proptest::array::uniform3(nonzero_coeff()),
        ) {
            // Even exponents on the left, odd on the right: nothing cancels
            let fa = FixedPolynomial::new([
                Term::new(a[0], 6),
                Term::new(a[1], 0),
                Term::new(a[2], 4),
                Term::new(a[3], 2),
            ]);
            let fb = FixedPolynomial::new([
                Term::new(b[0], 5),
                Term::new(b[1], 1),
                Term::new(b[2], 3),
            ]);

            let sum: FixedPolynomial<7> = fa.add(&fb).unwrap();
            let dynamic = fa.to_polynomial().add(&fb.to_polynomial());
            prop_assert_eq!(Polynomial::from(sum), dynamic);
        }

        #[test]
        fn fixed_add_with_cancelled_slot(
            c in proptest::array::uniform3(nonzero_coeff()),
            tail in nonzero_coeff(),
        ) {
            // The x^1 slot is written then vacated mid-merge
            let fa = FixedPolynomial::new([
                Term::new(c[0], 0),
                Term::new(c[1], 1),
                Term::new(c[2], 2),
            ]);
            let fb = FixedPolynomial::new([Term::new(-c[1], 1), Term::new(tail, 3)]);

            let sum: FixedPolynomial<3> = fa.add(&fb).unwrap();
            let exponents: Vec<i32> = sum.iter().map(Term::exponent).collect();
            prop_assert_eq!(exponents, vec![0, 2, 3]);
            let dynamic = fa.to_polynomial().add(&fb.to_polynomial());
            prop_assert_eq!(Polynomial::from(sum), dynamic);
        }

        #[test]
        fn slot_writer_matches_vec(lhs in sorted_terms(), rhs in sorted_terms()) {
            let mut expected = Vec::new();
            merge(&lhs, &rhs, TermOrder::Ascending, &mut expected);

            let mut slots = vec![Term::ZERO; expected.len()];
            let mut writer = SlotWriter::new(&mut slots);
            merge(&lhs, &rhs, TermOrder::Ascending, &mut writer);

            prop_assert_eq!(writer.len(), expected.len());
            prop_assert!(slots.iter().zip(&expected).all(|(s, e)| s.same_as(e)));
        }
    }
}
