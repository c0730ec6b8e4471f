use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};
use tolawatch_market_data::constants::{DEFAULT_FALLBACK_RATE, DEFAULT_TARGET_CURRENCY};
use tolawatch_market_data::credentials::DEFAULT_KEY_PREFIX;
use tolawatch_market_data::fx::DEFAULT_RATE_URL;
use tolawatch_market_data::provider::gold_api::DEFAULT_BASE_URL;
use tolawatch_market_data::CredentialConfig;

const DEFAULT_HISTORY_PATH: &str = "./data/history.json";
const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Log output format of the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if s.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else {
            bail!("Invalid TOLAWATCH_LOG_FORMAT: {s} (expected text or json)")
        }
    }
}

pub struct Config {
    pub credentials: CredentialConfig,
    pub price_api_url: String,
    pub fx_api_url: String,
    pub target_currency: String,
    pub fallback_rate: f64,
    pub history_path: PathBuf,
    pub webhook_url: Option<String>,
    pub interval: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Load `env_file` (when given), then `.env`, then read the process
    /// environment. Values already in the environment are never overridden.
    pub fn load(env_file: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = env_file {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
        }
        Self::from_env()
    }

    /// Load `.env` (when present) and read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build the config from an explicit list of variables.
    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let get = |name: &str| {
            vars.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let prefix = get("TOLAWATCH_KEY_PREFIX").unwrap_or_else(|| DEFAULT_KEY_PREFIX.into());
        let credentials = CredentialConfig::discover(&prefix, vars.iter().cloned());

        let price_api_url =
            get("TOLAWATCH_PRICE_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let fx_api_url = get("TOLAWATCH_FX_API_URL").unwrap_or_else(|| DEFAULT_RATE_URL.into());
        let target_currency = get("TOLAWATCH_TARGET_CURRENCY")
            .map(|c| c.to_uppercase())
            .unwrap_or_else(|| DEFAULT_TARGET_CURRENCY.into());

        let fallback_rate = match get("TOLAWATCH_FALLBACK_PKR_RATE") {
            Some(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("Invalid TOLAWATCH_FALLBACK_PKR_RATE: {raw}"))?,
            None => DEFAULT_FALLBACK_RATE,
        };
        if !fallback_rate.is_finite() || fallback_rate <= 0.0 {
            bail!("TOLAWATCH_FALLBACK_PKR_RATE must be a positive number, got {fallback_rate}");
        }

        let history_path = get("TOLAWATCH_HISTORY_PATH")
            .unwrap_or_else(|| DEFAULT_HISTORY_PATH.into())
            .into();
        let webhook_url = get("TOLAWATCH_WEBHOOK_URL");

        let interval_secs = match get("TOLAWATCH_INTERVAL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid TOLAWATCH_INTERVAL_SECS: {raw}"))?,
            None => DEFAULT_INTERVAL_SECS,
        };
        if interval_secs == 0 {
            bail!("TOLAWATCH_INTERVAL_SECS must be greater than zero");
        }

        let log_format = match get("TOLAWATCH_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            credentials,
            price_api_url,
            fx_api_url,
            target_currency,
            fallback_rate,
            history_path,
            webhook_url,
            interval: Duration::from_secs(interval_secs),
            log_format,
        })
    }
}
