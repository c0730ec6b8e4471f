//! Currency normalization.
//!
//! Fetches the USD to target-currency rate (best effort, with a configured
//! fallback) and rescales raw USD quotes into the target currency and mass
//! basis.

mod er_api;
mod normalize;

pub use er_api::{ErApiRateProvider, RateSource, DEFAULT_RATE_URL};
pub use normalize::{normalize, CurrencyNormalizer};
