//! `dpanel start|stop|restart|update|describe` — Run one container action.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Args;
use dockpanel_client::{ContainerApi, HttpApi};
use dockpanel_common::config::PanelConfig;
use dockpanel_common::types::{Action, ContainerId, ContainerSummary, Notification};
use dockpanel_core::{ActionOutcome, AssumeYes, Confirm, Dispatcher, Notifier, Refresh};
use tokio::sync::{oneshot, watch};

use crate::output;
use crate::prompt::TerminalConfirm;

/// Arguments shared by every action command.
#[derive(Args, Debug)]
pub struct ActionArgs {
    /// Container ID or name.
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Remembers that a refresh was requested so the CLI can show fresh state
/// once the scheduled delay has elapsed.
#[derive(Debug, Default)]
pub struct RefreshFlag(AtomicBool);

impl RefreshFlag {
    /// Returns `true` if a refresh fired.
    pub fn fired(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Refresh for RefreshFlag {
    fn refresh(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Executes an action command.
///
/// Prints every notification as it appears, waits for the scheduled refresh
/// after a success, and then prints the refreshed row for the container.
///
/// # Errors
///
/// Returns an error if the API client cannot be built. Action failures are
/// reported through the notification stream and a non-zero exit code.
pub async fn execute(
    action: Action,
    args: ActionArgs,
    config: &PanelConfig,
) -> anyhow::Result<ExitCode> {
    let api = HttpApi::new(config)?;
    let id = ContainerId::new(args.id);

    let mut stdout = std::io::stdout();
    let outcome = if args.yes {
        run_action(api, AssumeYes, action, &id, config, &mut stdout).await
    } else {
        run_action(api, TerminalConfirm, action, &id, config, &mut stdout).await
    };

    Ok(match outcome {
        ActionOutcome::Declined => {
            println!("Cancelled.");
            ExitCode::SUCCESS
        }
        ActionOutcome::Succeeded { .. } => ExitCode::SUCCESS,
        ActionOutcome::Failed(_) => ExitCode::FAILURE,
    })
}

/// Dispatches one action, writing notifications and then the refreshed row
/// to `out`.
async fn run_action<A, C>(
    api: A,
    confirm: C,
    action: Action,
    id: &ContainerId,
    config: &PanelConfig,
    out: &mut impl Write,
) -> ActionOutcome
where
    A: ContainerApi,
    C: Confirm,
{
    let notifier = Arc::new(Notifier::with_ttl(config.notification_ttl()));
    let refresh = Arc::new(RefreshFlag::default());
    let dispatcher = Dispatcher::new(api, confirm, Arc::clone(&refresh), Arc::clone(&notifier));
    let (stop, stopped) = oneshot::channel();

    let work = {
        let dispatcher = &dispatcher;
        async move {
            let outcome = dispatcher.dispatch(action, id).await;
            dispatcher.settle().await;
            let _ = stop.send(());
            outcome
        }
    };
    let printer = print_notifications(notifier.subscribe(), stopped, &mut *out);
    let (outcome, ()) = tokio::join!(work, printer);

    if refresh.fired() {
        let new_id = match &outcome {
            ActionOutcome::Succeeded { new_id, .. } => new_id.as_ref(),
            _ => None,
        };
        match dispatcher.api().list_containers().await {
            Ok(containers) => match refreshed_row(&containers, id, new_id) {
                Some(c) => {
                    let _ = writeln!(out, "{}", output::format_header(false));
                    let _ = writeln!(out, "{}", output::format_row(c, false));
                }
                None => {
                    let _ = writeln!(out, "Container {id} is no longer listed.");
                }
            },
            Err(e) => tracing::warn!(error = %e, "could not refresh container list"),
        }
    }
    outcome
}

/// Finds the container an action was run against in a fresh listing.
///
/// `wanted` may be a name or an ID of any length. An update replaces the
/// container, so its `new_id` is tried when the old one is gone.
fn refreshed_row<'a>(
    containers: &'a [ContainerSummary],
    wanted: &ContainerId,
    new_id: Option<&ContainerId>,
) -> Option<&'a ContainerSummary> {
    let find = |wanted: &ContainerId| {
        containers
            .iter()
            .find(|c| is_same_container(c, wanted.as_str()))
    };
    find(wanted).or_else(|| new_id.and_then(find))
}

fn is_same_container(c: &ContainerSummary, wanted: &str) -> bool {
    if wanted.is_empty() {
        return false;
    }
    let id = c.id.as_str();
    c.name == wanted || id.starts_with(wanted) || wanted.starts_with(id)
}

/// Writes visible notifications until told to stop, flushing the last one.
async fn print_notifications(
    mut rx: watch::Receiver<Notification>,
    mut stop: oneshot::Receiver<()>,
    out: &mut impl Write,
) {
    loop {
        tokio::select! {
            biased;
            changed = rx.changed() => {
                if changed.is_err() {
                    return;
                }
                print_current(&mut rx, out);
            }
            _ = &mut stop => {
                if rx.has_changed().unwrap_or(false) {
                    print_current(&mut rx, out);
                }
                return;
            }
        }
    }
}

fn print_current(rx: &mut watch::Receiver<Notification>, out: &mut impl Write) {
    let notification = rx.borrow_and_update().clone();
    if notification.visible {
        let _ = writeln!(out, "{}", output::format_notification(&notification));
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use dockpanel_common::error::Result;
    use dockpanel_common::types::ActionResult;

    use super::*;

    /// Answers after a short network delay and records every request.
    struct FakeApi {
        result: ActionResult,
        containers: Vec<ContainerSummary>,
        calls: Mutex<Vec<Action>>,
    }

    impl FakeApi {
        fn new(result: ActionResult, containers: Vec<ContainerSummary>) -> Self {
            Self {
                result,
                containers,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Action> {
            self.calls.lock().expect("lock").clone()
        }
    }

    impl ContainerApi for FakeApi {
        async fn post_action(&self, _id: &ContainerId, action: Action) -> Result<ActionResult> {
            self.calls.lock().expect("lock").push(action);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(self.result.clone())
        }

        async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
            Ok(self.containers.clone())
        }
    }

    struct Decline;

    impl Confirm for Decline {
        async fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    fn summary(id: &str, name: &str) -> ContainerSummary {
        ContainerSummary {
            id: ContainerId::new(id),
            name: name.into(),
            image: format!("{name}:latest"),
            status: "running".into(),
            description: format!("Container: {name}"),
            url: None,
            ports: Vec::new(),
            state: "running".into(),
        }
    }

    fn success(message: &str, new_id: Option<&str>) -> ActionResult {
        ActionResult {
            status: "success".into(),
            message: message.into(),
            description: None,
            new_id: new_id.map(Into::into),
        }
    }

    #[test]
    fn refresh_flag_records_refresh() {
        let flag = RefreshFlag::default();
        assert!(!flag.fired());
        flag.refresh();
        assert!(flag.fired());
    }

    #[test]
    fn refreshed_row_matches_name_or_id_prefix() {
        let containers = vec![summary("aaa111bbb222", "web"), summary("ccc333ddd444", "db")];
        let by_name = refreshed_row(&containers, &ContainerId::new("db"), None);
        assert_eq!(by_name.map(|c| c.name.as_str()), Some("db"));

        let by_prefix = refreshed_row(&containers, &ContainerId::new("aaa111"), None);
        assert_eq!(by_prefix.map(|c| c.name.as_str()), Some("web"));

        let long = ContainerId::new("ccc333ddd444eee555fff666");
        assert_eq!(
            refreshed_row(&containers, &long, None).map(|c| c.name.as_str()),
            Some("db")
        );
        assert!(refreshed_row(&containers, &ContainerId::new("zzz"), None).is_none());
    }

    #[test]
    fn refreshed_row_falls_back_to_replacement_id() {
        let containers = vec![summary("new999", "web-v2")];
        let new_id = ContainerId::new("new999");
        let row = refreshed_row(&containers, &ContainerId::new("old111"), Some(&new_id));
        assert_eq!(row.map(|c| c.name.as_str()), Some("web-v2"));
    }

    #[tokio::test(start_paused = true)]
    async fn update_prints_notices_then_only_the_replacement_row() {
        let api = Arc::new(FakeApi::new(
            success("Container web updated", Some("new999")),
            vec![summary("ccc333", "db"), summary("new999", "web-v2")],
        ));
        let mut out = Vec::new();

        let outcome = run_action(
            Arc::clone(&api),
            AssumeYes,
            Action::Update,
            &ContainerId::new("old111"),
            &PanelConfig::default(),
            &mut out,
        )
        .await;

        assert!(outcome.is_success());
        assert_eq!(api.calls(), vec![Action::Update]);
        let printed = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 4, "unexpected output:\n{printed}");
        assert_eq!(lines[0], "[info] Updating container... This may take a minute.");
        assert_eq!(lines[1], "[success] Container web updated");
        assert!(lines[2].starts_with("CONTAINER ID"));
        assert!(lines[3].starts_with("new999"));
        assert!(!printed.contains("ccc333"));
    }

    #[tokio::test(start_paused = true)]
    async fn start_prints_the_row_for_that_container() {
        let api = FakeApi::new(
            success("Container web started", None),
            vec![summary("aaa111", "web"), summary("ccc333", "db")],
        );
        let mut out = Vec::new();

        let _ = run_action(
            api,
            AssumeYes,
            Action::Start,
            &ContainerId::new("web"),
            &PanelConfig::default(),
            &mut out,
        )
        .await;

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.starts_with("[success] Container web started\n"));
        assert!(printed.contains("aaa111"));
        assert!(!printed.contains("ccc333"));
    }

    #[tokio::test(start_paused = true)]
    async fn declined_prompt_sends_nothing_and_prints_nothing() {
        let api = Arc::new(FakeApi::new(
            success("Container web stopped", None),
            vec![summary("aaa111", "web")],
        ));
        let mut out = Vec::new();

        let outcome = run_action(
            Arc::clone(&api),
            Decline,
            Action::Stop,
            &ContainerId::new("aaa111"),
            &PanelConfig::default(),
            &mut out,
        )
        .await;

        assert!(matches!(outcome, ActionOutcome::Declined));
        assert!(api.calls().is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_action_prints_error_without_refresh() {
        let result = ActionResult {
            status: "error".into(),
            message: "No such container".into(),
            ..ActionResult::default()
        };
        let mut out = Vec::new();

        let outcome = run_action(
            FakeApi::new(result, vec![summary("aaa111", "web")]),
            AssumeYes,
            Action::Restart,
            &ContainerId::new("aaa111"),
            &PanelConfig::default(),
            &mut out,
        )
        .await;

        assert!(matches!(outcome, ActionOutcome::Failed(_)));
        assert_eq!(String::from_utf8(out).expect("utf8"), "[error] No such container\n");
    }
}
