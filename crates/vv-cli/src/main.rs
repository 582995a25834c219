use vv_cli::logger::{self, LogTarget};
use vv_cli::{Cli, CliResult, build_context, execute};

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use vv_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {hint}");
            }
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> CliResult<bool> {
    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level.raised_by(cli.verbose),
        LogTarget::from_config(&config, &config_dir),
    )?;

    debug!("Starting vv v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let context = build_context(&config, &config_dir);
    context.initialize().await;

    let outcome = execute(cli.command, &context).await?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&outcome.value)
    } else {
        serde_json::to_string(&outcome.value)
    }?;
    println!("{rendered}");

    Ok(outcome.success)
}
