//! # dpanel — dockpanel CLI
//!
//! Start, stop, restart, update, and describe containers managed by a
//! remote dockpanel API, from the shell or an interactive dashboard.

mod commands;
mod output;
mod prompt;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::commands::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // The dashboard owns the screen; log lines would tear it.
    let writer = if matches!(cli.command, Command::Dashboard) {
        BoxMakeWriter::new(std::io::sink)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .init();

    commands::execute(cli).await
}
