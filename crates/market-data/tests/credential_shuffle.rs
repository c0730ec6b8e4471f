//! Properties of the shuffled credential order.

use std::collections::HashMap;

use proptest::prelude::*;
use tolawatch_market_data::credentials::shuffled_order;
use tolawatch_market_data::{Credential, CredentialPool};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Shuffling keeps every credential exactly once.
    #[test]
    fn prop_shuffle_is_bijection(values in proptest::collection::hash_set("[a-z0-9]{4,16}", 0..12)) {
        let pool = CredentialPool::new(values.iter());
        let order = pool.shuffled_order();

        prop_assert_eq!(order.len(), pool.len());

        let mut sorted: Vec<&str> = order.iter().map(|c| c.expose()).collect();
        sorted.sort_unstable();
        let mut expected: Vec<&str> = pool.list_credentials().iter().map(|c| c.expose()).collect();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }
}

#[test]
fn shuffle_is_roughly_uniform() {
    let credentials: Vec<Credential> = ["a", "b", "c"].iter().map(|v| Credential::new(*v)).collect();
    let runs = 12_000;
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..runs {
        let order: String = shuffled_order(&credentials)
            .iter()
            .map(|c| c.expose().to_string())
            .collect();
        *counts.entry(order).or_default() += 1;
    }

    // 3! permutations, each expected 2000 times.
    assert_eq!(counts.len(), 6);
    for (order, count) in &counts {
        assert!(
            (1_600..=2_400).contains(count),
            "permutation {} seen {} times",
            order,
            count
        );
    }
}

#[test]
fn empty_input_shuffles_to_empty() {
    assert!(shuffled_order(&[]).is_empty());
}
