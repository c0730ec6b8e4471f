use serde::{Deserialize, Serialize};

/// Gold prices in the target currency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPrices {
    pub per_gram: f64,
    pub per_tola: f64,
}

/// Silver prices in the target currency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SilverPrices {
    pub per_kg: f64,
    pub per_tola: f64,
}

/// Per-tola view of a snapshot plus the gold:silver ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvertedPrices {
    pub gold: GoldPrices,
    pub silver: SilverPrices,
    /// Gold per tola divided by silver per tola
    pub ratio: f64,
}

impl ConvertedPrices {
    /// Whether every field is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        [
            self.gold.per_gram,
            self.gold.per_tola,
            self.silver.per_kg,
            self.silver.per_tola,
            self.ratio,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}
