//! Property-based tests for pooled digit-list arithmetic.
//!
//! num-bigint serves as the oracle: every `LargeInt` result must render
//! to the same decimal text `BigUint` produces for the same inputs.

use std::cmp::Ordering;

use num_bigint::BigUint;
use proptest::prelude::*;

use largeint_core::{LargeInt, PoolHandle};

/// Decimal strings without leading zeros, up to 40 digits.
fn decimal_string() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just("0".to_string()),
        9 => "[1-9][0-9]{0,39}",
    ]
}

fn oracle(s: &str) -> BigUint {
    s.parse().expect("strategy only yields decimal strings")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Constructing from u64 and rendering yields the native formatting.
    #[test]
    fn u64_round_trip(n in any::<u64>()) {
        let pool = PoolHandle::new();
        prop_assert_eq!(LargeInt::from_u64(&pool, n).to_string(), n.to_string());
    }

    /// Parsing and rendering a digit string is the identity (modulo
    /// leading-zero normalization, which the strategy never produces).
    #[test]
    fn string_round_trip(s in decimal_string()) {
        let pool = PoolHandle::new();
        prop_assert_eq!(LargeInt::parse(&pool, &s).unwrap().to_string(), s);
    }

    /// a + b matches the oracle and is commutative.
    #[test]
    fn addition_matches_oracle(a in decimal_string(), b in decimal_string()) {
        let pool = PoolHandle::new();
        let x = LargeInt::parse(&pool, &a).unwrap();
        let y = LargeInt::parse(&pool, &b).unwrap();
        let expected = (oracle(&a) + oracle(&b)).to_string();
        prop_assert_eq!((&x + &y).to_string(), expected.clone());
        prop_assert_eq!((&y + &x).to_string(), expected);
    }

    /// a * b matches the oracle and is commutative.
    #[test]
    fn multiplication_matches_oracle(a in decimal_string(), b in decimal_string()) {
        let pool = PoolHandle::new();
        let x = LargeInt::parse(&pool, &a).unwrap();
        let y = LargeInt::parse(&pool, &b).unwrap();
        let expected = (oracle(&a) * oracle(&b)).to_string();
        prop_assert_eq!((&x * &y).to_string(), expected.clone());
        prop_assert_eq!((&y * &x).to_string(), expected);
    }

    /// Zero and one behave as the additive and multiplicative identities.
    #[test]
    fn identities(a in decimal_string()) {
        let pool = PoolHandle::new();
        let x = LargeInt::parse(&pool, &a).unwrap();
        let zero = LargeInt::zero(&pool);
        let one = LargeInt::from_u64(&pool, 1);
        prop_assert_eq!(&x + &zero, x.clone());
        prop_assert_eq!(&x * &one, x.clone());
        prop_assert_eq!(&x * &zero, zero);
    }

    /// Comparison agrees with the oracle's total order.
    #[test]
    fn comparison_matches_oracle(a in decimal_string(), b in decimal_string()) {
        let pool = PoolHandle::new();
        let x = LargeInt::parse(&pool, &a).unwrap();
        let y = LargeInt::parse(&pool, &b).unwrap();
        let expected = oracle(&a).cmp(&oracle(&b));
        prop_assert_eq!(x.cmp(&y), expected);
        match expected {
            Ordering::Less => prop_assert!(x < y),
            Ordering::Equal => prop_assert!(x == y),
            Ordering::Greater => prop_assert!(x > y),
        }
    }

    /// Compound assignment equals the non-destructive operator.
    #[test]
    fn compound_assignment(a in decimal_string(), b in decimal_string()) {
        let pool = PoolHandle::new();
        let x = LargeInt::parse(&pool, &a).unwrap();
        let y = LargeInt::parse(&pool, &b).unwrap();

        let mut sum = x.clone();
        sum += &y;
        prop_assert_eq!(&sum, &(&x + &y));

        let mut product = x.clone();
        product *= &y;
        prop_assert_eq!(&product, &(&x * &y));
    }

    /// Churning values through one pool never leaks stale digits into
    /// later results: recycled nodes always reinitialize fully.
    #[test]
    fn pool_reuse_is_invisible(values in prop::collection::vec(decimal_string(), 2..8)) {
        let pool = PoolHandle::new();
        let mut acc = BigUint::ZERO;
        let mut running = LargeInt::zero(&pool);
        for s in &values {
            // Build, fold in, and drop a scratch value each round so the
            // free list is exercised between arithmetic steps.
            let scratch = LargeInt::parse(&pool, s).unwrap();
            running += &scratch;
            acc += oracle(s);
            drop(scratch);
            prop_assert_eq!(running.to_string(), acc.to_string());
        }
    }
}
