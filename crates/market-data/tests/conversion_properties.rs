//! Property-based tests for tola conversion and normalization.

use proptest::prelude::*;
use tolawatch_market_data::constants::GRAMS_PER_TOLA;
use tolawatch_market_data::{convert, normalize, MassBasis, RawQuote};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The ratio does not depend on the tola constant: it is gold per gram
    /// over silver per gram.
    #[test]
    fn prop_ratio_is_independent_of_tola(g in 0.01f64..1.0e7, s in 0.01f64..1.0e9) {
        let prices = convert(g, s);
        prop_assert!(close(prices.ratio, g / (s / 1000.0)));
        prop_assert!(close(
            prices.ratio,
            (g * GRAMS_PER_TOLA) / ((s / 1000.0) * GRAMS_PER_TOLA)
        ));
    }

    /// Tola prices follow from the per-gram and per-kilogram inputs.
    #[test]
    fn prop_tola_relations_hold(g in 0.01f64..1.0e7, s in 0.01f64..1.0e9) {
        let prices = convert(g, s);
        prop_assert_eq!(prices.gold.per_tola, g * GRAMS_PER_TOLA);
        prop_assert_eq!(prices.silver.per_tola, (s / 1000.0) * GRAMS_PER_TOLA);
        prop_assert!(close(prices.ratio, prices.gold.per_tola / prices.silver.per_tola));
        prop_assert!(prices.is_well_formed());
    }

    /// A kilogram costs a thousand grams, whichever price field is used.
    #[test]
    fn prop_kilogram_basis_scales_by_thousand(
        price in 0.01f64..1.0e5,
        rate in 0.01f64..1.0e4,
        per_gram in proptest::bool::ANY,
    ) {
        let quote = if per_gram { RawQuote::per_gram(price) } else { RawQuote::per_ounce(price) };
        let gram = normalize(&quote, rate, MassBasis::Gram);
        let kilo = normalize(&quote, rate, MassBasis::Kilogram);
        prop_assert!(close(kilo, gram * 1000.0));
    }
}
