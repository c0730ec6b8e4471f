//! Periodic price cycles for watch mode.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tolawatch_core::{CycleOptions, PriceCycleService, PriceCycleServiceTrait};
use tracing::{info, warn};

/// Run cycles forever: the first immediately, then every `period`.
/// A failed cycle is logged and the next tick proceeds.
pub async fn run_watch(service: &PriceCycleService, period: Duration, options: CycleOptions) {
    info!("Watch mode started ({}s interval)", period.as_secs());

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        run_scheduled_cycle(service, options).await;
    }
}

async fn run_scheduled_cycle(service: &PriceCycleService, options: CycleOptions) {
    match service.run_cycle(options).await {
        Ok(report) => info!(
            "Scheduled cycle completed: gold {:.0}/tola, silver {:.0}/tola, notification {:?}",
            report.entry.prices.gold.per_tola,
            report.entry.prices.silver.per_tola,
            report.notification
        ),
        Err(e) => warn!("Scheduled cycle failed: {}", e),
    }
}
