use serde::{Deserialize, Serialize};

use crate::constants::GRAMS_PER_KILOGRAM;

/// Metals fetched from the price API.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Metal {
    /// XAU
    Gold,
    /// XAG
    Silver,
}

impl Metal {
    /// Symbol used in the price API path.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Gold => "XAU",
            Self::Silver => "XAG",
        }
    }
}

impl std::fmt::Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Silver => write!(f, "silver"),
        }
    }
}

/// Mass unit a normalized price is expressed per.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MassBasis {
    Gram,
    Kilogram,
}

impl MassBasis {
    /// Number of grams in one unit of this basis.
    pub fn grams(&self) -> f64 {
        match self {
            Self::Gram => 1.0,
            Self::Kilogram => GRAMS_PER_KILOGRAM,
        }
    }
}
