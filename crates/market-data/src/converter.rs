//! Conversion of normalized prices into tola.

use crate::constants::{GRAMS_PER_KILOGRAM, GRAMS_PER_TOLA};
use crate::models::{ConvertedPrices, GoldPrices, PriceSnapshot, SilverPrices};

/// Convert a gold per-gram and silver per-kilogram price into per-tola prices.
///
/// Pure and total: non-finite inputs propagate into the output as NaN/Inf.
/// Callers validate before persisting.
pub fn convert(gold_per_gram: f64, silver_per_kg: f64) -> ConvertedPrices {
    let gold_per_tola = gold_per_gram * GRAMS_PER_TOLA;
    let silver_per_tola = (silver_per_kg / GRAMS_PER_KILOGRAM) * GRAMS_PER_TOLA;

    ConvertedPrices {
        gold: GoldPrices {
            per_gram: gold_per_gram,
            per_tola: gold_per_tola,
        },
        silver: SilverPrices {
            per_kg: silver_per_kg,
            per_tola: silver_per_tola,
        },
        ratio: gold_per_tola / silver_per_tola,
    }
}

impl From<&PriceSnapshot> for ConvertedPrices {
    fn from(snapshot: &PriceSnapshot) -> Self {
        convert(snapshot.gold_per_gram(), snapshot.silver_per_kg())
    }
}
