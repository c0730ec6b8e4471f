use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use tolawatch_core::{format_price_message, CycleOptions, PriceCycleServiceTrait};
use tolawatch_market_data::CredentialPool;

use crate::config::Config;
use crate::main_lib::build_service;
use crate::scheduler::run_watch;

#[derive(Parser)]
#[command(name = "tolawatch")]
#[command(author, version, about = "Gold and silver prices per tola, with key failover")]
pub struct Cli {
    /// Fetch and print only; history and notification are left untouched
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Extra environment file to load before reading configuration
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        env = "TOLAWATCH_ENV_FILE",
        global = true
    )]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run one price cycle (default)
    Fetch,
    /// Run price cycles on a fixed interval
    Watch {
        /// Interval in seconds, overrides TOLAWATCH_INTERVAL_SECS
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Print the most recent history entries
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Print the raw entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured API keys, masked
    Keys,
}

/// Execute the parsed command against an already loaded config.
pub async fn run(cli: Cli, mut config: Config) -> anyhow::Result<()> {
    let options = CycleOptions {
        dry_run: cli.dry_run,
    };

    match cli.command.unwrap_or(Command::Fetch) {
        Command::Fetch => {
            let service = build_service(&config);
            let report = service.run_cycle(options).await?;
            println!("{}", report.message);
            tracing::info!(
                "Cycle completed: history entries {:?}, notification {:?}",
                report.history_len,
                report.notification
            );
        }
        Command::Watch { interval } => {
            if let Some(secs) = interval.filter(|s| *s > 0) {
                config.interval = std::time::Duration::from_secs(secs);
            }
            let service = build_service(&config);
            run_watch(&service, config.interval, options).await;
        }
        Command::History { limit, json } => {
            let service = build_service(&config);
            let entries = service.recent_history(limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("No history at {}", config.history_path.display());
            }
            let mut previous = None;
            for entry in &entries {
                println!("{}\n", format_price_message(entry, previous));
                previous = Some(entry);
            }
        }
        Command::Keys => {
            let pool = CredentialPool::from_config(&config.credentials);
            if pool.is_empty() {
                println!("No credentials found with prefix {}", config.credentials.prefix);
            }
            for (i, credential) in pool.list_credentials().iter().enumerate() {
                println!("{:>2}. {}", i + 1, credential.masked());
            }
        }
    }

    Ok(())
}
