//! Market data models
//!
//! This module contains the core data types for price fetching:
//! - `types` - Type alias for currency codes (Currency)
//! - `metal` - Metals and the mass basis a price is expressed per
//! - `quote` - Raw price API responses (RawQuote)
//! - `snapshot` - One normalized gold/silver reading (PriceSnapshot, ExchangeRate)
//! - `prices` - Per-tola converted prices (ConvertedPrices)

mod metal;
mod prices;
mod quote;
mod snapshot;
mod types;

pub use metal::{MassBasis, Metal};
pub use prices::{ConvertedPrices, GoldPrices, SilverPrices};
pub use quote::RawQuote;
pub use snapshot::{ExchangeRate, PriceSnapshot};
pub use types::Currency;
