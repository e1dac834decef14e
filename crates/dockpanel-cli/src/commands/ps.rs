//! `dpanel ps` — List containers.

use std::process::ExitCode;

use clap::Args;
use dockpanel_client::{ContainerApi, HttpApi};
use dockpanel_common::config::PanelConfig;

use crate::output;

/// Arguments for the `ps` command.
#[derive(Args, Debug)]
pub struct PsArgs {
    /// Also show each container's URL and description.
    #[arg(long)]
    pub all_columns: bool,

    /// Print the raw listing as JSON.
    #[arg(long, conflicts_with = "all_columns")]
    pub json: bool,
}

/// Executes the `ps` command.
///
/// Fetches every container, running or stopped, from the API and displays
/// the list in a tabular format.
///
/// # Errors
///
/// Returns an error if the API cannot be reached or answers with an error.
pub async fn execute(args: PsArgs, config: &PanelConfig) -> anyhow::Result<ExitCode> {
    let api = HttpApi::new(config)?;
    let containers = api.list_containers().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&containers)?);
    } else {
        output::print_containers(&containers, args.all_columns);
    }
    Ok(ExitCode::SUCCESS)
}
