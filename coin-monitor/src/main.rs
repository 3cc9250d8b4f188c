mod arithmetic_renderer;
mod cli;
mod clock;
mod coincap_client;
mod config;
mod loading_indicator;
mod monitor;
mod record_transformer;
mod row_renderer;
mod table_printer;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::Config;
use log::LevelFilter;
use log::debug;
use monitor::ColorSupport;
use monitor::Monitor;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    env_logger::builder()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let config = if let Some(config_path) = &args.config {
        let config_yaml = tokio::fs::read_to_string(config_path)
            .await
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        Config::parse(&config_yaml)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?
    } else {
        Default::default()
    };

    let options = args.options();
    debug!(
        "Fetching {} assets from {} (symbols: {:?})",
        options.limit,
        config.api_url,
        options.symbols
    );

    let colors = ColorSupport::detect();
    println!();
    let report = Monitor::new(options, &config, colors.stdout).run().await;
    report.print(colors);
    Ok(report.exit_code())
}
