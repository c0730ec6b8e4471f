//! Price provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait the key rotation calls with one credential at a time
//! - The goldapi.io implementation
//!
//! Providers report transport failures as errors and hand back logical API
//! errors inside the quote, so the rotation can tell the two apart.

mod traits;

pub mod gold_api;

pub use gold_api::GoldApiProvider;
pub use traits::PriceProvider;
