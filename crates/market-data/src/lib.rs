//! Tolawatch Market Data Crate
//!
//! This crate fetches gold and silver spot prices from a quota-limited price
//! API using a pool of interchangeable keys, and normalizes them into the
//! target currency and mass basis.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A pool of API keys tried in a fresh random order every cycle
//! - Correlated gold/silver fetches with one key per trial
//! - Structured classification of transport vs. logical API failures
//! - Best-effort exchange rates with a configurable fallback
//! - Conversion into per-tola prices
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! | SnapshotAssembler| --> |    KeyRotator    |  (shuffled credential pool)
//! +------------------+     +------------------+
//!          |                        |
//!          |                        v
//!          |               +------------------+
//!          |               |  PriceProvider   |  (goldapi.io, gold then silver)
//!          |               +------------------+
//!          v
//! +------------------+
//! |CurrencyNormalizer|  (USD -> PKR, per gram / per kg)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  PriceSnapshot   | --> | ConvertedPrices  |  (per tola, ratio)
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Credential`] - One API key, masked in logs
//! - [`CredentialPool`] - Interchangeable keys available for failover
//! - [`RawQuote`] - Price API response for one metal
//! - [`PriceSnapshot`] - One consistent gold/silver reading in the target currency
//! - [`ConvertedPrices`] - Per-tola prices and the gold:silver ratio

pub mod constants;
pub mod converter;
pub mod credentials;
pub mod errors;
pub mod fx;
pub mod models;
pub mod provider;
pub mod registry;
pub mod snapshot;

// Re-export all public types from models
pub use models::{
    ConvertedPrices, Currency, ExchangeRate, GoldPrices, MassBasis, Metal, PriceSnapshot, RawQuote,
    SilverPrices,
};

pub use converter::convert;
pub use credentials::{Credential, CredentialConfig, CredentialPool};
pub use errors::{ApiErrorKind, MarketDataError, RetryClass};
pub use fx::{normalize, CurrencyNormalizer, ErApiRateProvider, RateSource};
pub use provider::{GoldApiProvider, PriceProvider};
pub use registry::{FetchDiagnostics, KeyRotator, QuotePair, SnapshotValidator};
pub use snapshot::SnapshotAssembler;
