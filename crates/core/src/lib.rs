//! Tolawatch Core - price cycle orchestration, history and notification.
//!
//! This crate wires the market data crate into a complete cycle:
//! fetch a snapshot, validate it, convert it to tola, append it to the
//! history store and send the formatted message to the notifier.

pub mod errors;
pub mod history;
pub mod notify;
pub mod pricing;

pub use history::{HistoryEntry, HistoryRepositoryTrait, JsonHistoryRepository};
pub use notify::{format_price_message, NotifierTrait, WebhookNotifier};
pub use pricing::{
    CycleOptions, CycleReport, NotificationOutcome, PriceCycleService, PriceCycleServiceTrait,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
