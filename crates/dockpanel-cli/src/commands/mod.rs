//! CLI command definitions and dispatch.

pub mod action;
pub mod dashboard;
pub mod ps;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dockpanel_common::config::PanelConfig;
use dockpanel_common::constants::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use dockpanel_common::types::Action;

/// dockpanel — manage containers through a remote dashboard API.
#[derive(Parser, Debug)]
#[command(name = "dpanel", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the container-management API.
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Abort API requests that take longer than this many seconds.
    #[arg(long, global = true, env = TIMEOUT_ENV)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Builds the panel configuration from the global options.
    pub fn config(&self) -> PanelConfig {
        PanelConfig {
            request_timeout_secs: self.timeout_secs,
            ..PanelConfig::with_base_url(self.url.clone())
        }
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List containers.
    Ps(ps::PsArgs),
    /// Start a container.
    Start(action::ActionArgs),
    /// Stop a container.
    Stop(action::ActionArgs),
    /// Restart a container.
    Restart(action::ActionArgs),
    /// Pull the latest image and recreate a container.
    Update(action::ActionArgs),
    /// Regenerate a container's description.
    Describe(action::ActionArgs),
    /// Open the interactive dashboard.
    Dashboard,
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command cannot reach the API or the terminal.
pub async fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.config();
    match cli.command {
        Command::Ps(args) => ps::execute(args, &config).await,
        Command::Start(args) => action::execute(Action::Start, args, &config).await,
        Command::Stop(args) => action::execute(Action::Stop, args, &config).await,
        Command::Restart(args) => action::execute(Action::Restart, args, &config).await,
        Command::Update(args) => action::execute(Action::Update, args, &config).await,
        Command::Describe(args) => {
            action::execute(Action::RegenerateDescription, args, &config).await
        }
        Command::Dashboard => dashboard::execute(config).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_action_with_yes() {
        let cli = Cli::try_parse_from(["dpanel", "stop", "abc123", "--yes"]).expect("parse");
        match cli.command {
            Command::Stop(args) => {
                assert_eq!(args.id, "abc123");
                assert!(args.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_options_feed_config() {
        let cli = Cli::try_parse_from([
            "dpanel",
            "--url",
            "http://192.168.1.5",
            "--timeout-secs",
            "30",
            "ps",
        ])
        .expect("parse");
        let config = cli.config();
        assert_eq!(config.base_url, "http://192.168.1.5");
        assert_eq!(config.request_timeout_secs, Some(30));
    }

    #[test]
    fn ps_accepts_all_columns() {
        let cli = Cli::try_parse_from(["dpanel", "ps", "--all-columns"]).expect("parse");
        match cli.command {
            Command::Ps(args) => {
                assert!(args.all_columns);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["dpanel", "ps", "--all"]).is_err());
    }

    #[test]
    fn action_requires_container_id() {
        assert!(Cli::try_parse_from(["dpanel", "restart"]).is_err());
    }
}
