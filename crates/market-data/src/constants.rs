//! Fixed unit and rate constants.

/// Grams in one tola (South Asian bullion unit).
pub const GRAMS_PER_TOLA: f64 = 11.6638038;

/// Grams in one troy ounce.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Grams in one kilogram.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// USD to PKR rate used when the exchange-rate endpoint is unavailable.
pub const DEFAULT_FALLBACK_RATE: f64 = 282.81;

/// Currency the price API is queried in.
pub const QUOTE_CURRENCY: &str = "USD";

/// Currency the snapshot is normalized into.
pub const DEFAULT_TARGET_CURRENCY: &str = "PKR";
