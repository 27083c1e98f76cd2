use anyhow::Context;
use clap::Parser;

use kaibako::cli::Cli;
use kaibako::config::Config;
use kaibako::service::Classifier;
use kaibako::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    let config = cli.apply(config);
    config.validate().context("invalid configuration")?;

    let provider =
        Classifier::from_config(&config.service).context("failed to build classifier")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    ui::run(provider, runtime.handle().clone()).context("terminal UI failed")?;
    Ok(())
}
