use clap::Parser;
use tolawatch_cli::cli::{run, Cli};
use tolawatch_cli::config::Config;
use tolawatch_cli::main_lib::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.env_file.as_deref())?;
    init_tracing(config.log_format);
    run(cli, config).await
}
