//! File-backed tracing setup.
//!
//! The TUI owns stdout, so logs go to a file or nowhere. With no
//! `--log-file` the subscriber is never installed and every tracing call is
//! a no-op.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

pub fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file '{}'", path.display()))?;
    let writer = Arc::new(file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(move || Arc::clone(&writer))
        .with_ansi(false)
        .init();

    Ok(())
}
