use std::borrow::Cow;
use std::sync::Arc;

use tolawatch_core::{
    HistoryRepositoryTrait, JsonHistoryRepository, NotifierTrait, PriceCycleService,
    WebhookNotifier,
};
use tolawatch_market_data::{
    CredentialPool, CurrencyNormalizer, ErApiRateProvider, GoldApiProvider, KeyRotator,
    SnapshotAssembler, SnapshotValidator,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Install the global subscriber. Call after the env files are loaded so
/// `RUST_LOG` and the configured format set there take effect.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_service(config: &Config) -> PriceCycleService {
    let pool = CredentialPool::from_config(&config.credentials);
    tracing::info!(
        "{} credential(s) configured, history at {}",
        pool.len(),
        config.history_path.display()
    );

    let provider = Arc::new(GoldApiProvider::new(config.price_api_url.clone()));
    let rate_source = Arc::new(ErApiRateProvider::new(
        config.fx_api_url.clone(),
        config.target_currency.clone(),
    ));
    let assembler = SnapshotAssembler::new(
        KeyRotator::new(provider, pool),
        CurrencyNormalizer::with_fallback(rate_source, config.fallback_rate),
        Cow::Owned(config.target_currency.clone()),
    );

    let history: Arc<dyn HistoryRepositoryTrait> =
        Arc::new(JsonHistoryRepository::new(config.history_path.clone()));
    let notifier = config.webhook_url.as_ref().map(|url| {
        let notifier: Arc<dyn NotifierTrait> = Arc::new(WebhookNotifier::new(url.clone()));
        notifier
    });
    if notifier.is_none() {
        tracing::info!("TOLAWATCH_WEBHOOK_URL not set, notifications disabled");
    }

    PriceCycleService::new(assembler, SnapshotValidator::new(), history, notifier)
}
