//! Pricing module - the price cycle service.

mod pricing_model;
mod pricing_service;
mod pricing_traits;

pub use pricing_model::{CycleOptions, CycleReport, NotificationOutcome};
pub use pricing_service::PriceCycleService;
pub use pricing_traits::PriceCycleServiceTrait;
