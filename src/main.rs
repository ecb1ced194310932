use anyhow::Context;
use clap::Parser;
use tracing::debug;

use affilinker::cli::Cli;
use affilinker::config::init_config;
use affilinker::interfaces::cli::run_cli_command;
use affilinker::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(&cli.config);

    // guard 必须存活到进程结束，否则非阻塞日志不会落盘
    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!("Configuration loaded from {}", cli.config);

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}
