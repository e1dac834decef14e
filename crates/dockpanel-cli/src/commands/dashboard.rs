//! `dpanel dashboard` — Open the interactive dashboard.

use std::process::ExitCode;

use dockpanel_common::config::PanelConfig;

/// Executes the `dashboard` command.
///
/// # Errors
///
/// Returns an error if the terminal or the API client cannot be set up.
pub async fn execute(config: PanelConfig) -> anyhow::Result<ExitCode> {
    dockpanel_tui::run(config).await?;
    Ok(ExitCode::SUCCESS)
}
