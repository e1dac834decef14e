//! TUI application state machine.
//!
//! Holds what the dashboard shows and turns key presses into commands for
//! the event loop. Nothing here performs I/O, so every transition is
//! testable without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dockpanel_common::types::{Action, ContainerId, ContainerSummary, Notification};
use tokio::sync::oneshot;

/// Which view the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Main dashboard with container list.
    Dashboard,
    /// Detailed view of a single container.
    ContainerDetail,
}

/// A confirmation the user has not answered yet.
#[derive(Debug)]
pub struct PendingConfirm {
    /// Question shown in the modal.
    pub prompt: String,
    reply: oneshot::Sender<bool>,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing beyond redrawing.
    None,
    /// Leave the dashboard.
    Quit,
    /// Fetch the container list again.
    Refresh,
    /// Run an action against a container.
    Dispatch(Action, ContainerId),
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Current active view.
    pub current_view: View,
    /// Index of the selected container in the list.
    pub selected_index: usize,
    /// Containers as of the last successful refresh.
    pub containers: Vec<ContainerSummary>,
    /// Notification to show in the toast line.
    pub notification: Option<Notification>,
    /// Open confirmation modal, if any.
    pub confirm: Option<PendingConfirm>,
    /// Whether at least one refresh has completed.
    pub loaded: bool,
}

impl App {
    /// Creates a new application state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            running: true,
            current_view: View::Dashboard,
            selected_index: 0,
            containers: Vec::new(),
            notification: None,
            confirm: None,
            loaded: false,
        }
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
        // Unanswered prompts resolve as declined once the sender drops.
        self.confirm = None;
    }

    /// Returns the selected container, if the list is not empty.
    pub fn selected(&self) -> Option<&ContainerSummary> {
        self.containers.get(self.selected_index)
    }

    /// Moves the selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.containers.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.containers.len();
        }
    }

    /// Moves the selection up, wrapping at the start.
    pub fn select_previous(&mut self) {
        if !self.containers.is_empty() {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(self.containers.len() - 1);
        }
    }

    /// Replaces the container list, keeping the selection on the same
    /// container when it is still present.
    pub fn set_containers(&mut self, containers: Vec<ContainerSummary>) {
        let selected_id = self.selected().map(|c| c.id.clone());
        self.containers = containers;
        self.loaded = true;
        self.selected_index = selected_id
            .and_then(|id| self.containers.iter().position(|c| c.id == id))
            .unwrap_or_else(|| self.selected_index.min(self.containers.len().saturating_sub(1)));
        if self.containers.is_empty() {
            self.current_view = View::Dashboard;
        }
    }

    /// Opens the confirmation modal.
    ///
    /// While one prompt is open, further prompts are declined straight away.
    pub fn ask(&mut self, prompt: String, reply: oneshot::Sender<bool>) {
        if self.confirm.is_some() {
            tracing::debug!(prompt = %prompt, "confirmation already open, declining");
            let _ = reply.send(false);
            return;
        }
        self.confirm = Some(PendingConfirm { prompt, reply });
    }

    /// Answers and closes the confirmation modal.
    pub fn answer(&mut self, accepted: bool) {
        if let Some(pending) = self.confirm.take() {
            // The asking task may already be gone; nothing to do then.
            let _ = pending.reply.send(accepted);
        }
    }

    /// Maps a key press to a state change and a command for the loop.
    pub fn handle_key(&mut self, key: KeyEvent) -> Command {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return Command::Quit;
        }

        if self.confirm.is_some() {
            match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.answer(true),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => self.answer(false),
                _ => {}
            }
            return Command::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                Command::Quit
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Command::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Command::None
            }
            KeyCode::Enter => {
                if self.selected().is_some() {
                    self.current_view = View::ContainerDetail;
                }
                Command::None
            }
            KeyCode::Esc => {
                self.current_view = View::Dashboard;
                Command::None
            }
            KeyCode::F(5) => Command::Refresh,
            KeyCode::Char(ch) => Self::action_for(ch).map_or(Command::None, |action| {
                self.selected()
                    .map_or(Command::None, |c| Command::Dispatch(action, c.id.clone()))
            }),
            _ => Command::None,
        }
    }

    const fn action_for(key: char) -> Option<Action> {
        match key {
            's' => Some(Action::Start),
            'x' => Some(Action::Stop),
            'r' => Some(Action::Restart),
            'u' => Some(Action::Update),
            'd' => Some(Action::RegenerateDescription),
            _ => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use dockpanel_common::types::PortMapping;

    use super::*;

    pub(crate) fn container(id: &str, name: &str, status: &str) -> ContainerSummary {
        ContainerSummary {
            id: ContainerId::new(id),
            name: name.into(),
            image: format!("{name}:latest"),
            status: status.into(),
            description: format!("Container: {name}"),
            url: Some("http://192.168.1.5:8080".into()),
            ports: vec![PortMapping {
                container_port: "80/tcp".into(),
                host_port: "8080".into(),
                host_ip: "0.0.0.0".into(),
            }],
            state: status.into(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.set_containers(vec![
            container("aaa111", "web", "running"),
            container("bbb222", "db", "exited"),
        ]);
        app
    }

    #[test]
    fn action_keys_dispatch_for_selected_container() {
        let mut app = loaded_app();
        assert_eq!(
            app.handle_key(key(KeyCode::Char('s'))),
            Command::Dispatch(Action::Start, ContainerId::new("aaa111"))
        );

        let _ = app.handle_key(key(KeyCode::Down));
        assert_eq!(
            app.handle_key(key(KeyCode::Char('x'))),
            Command::Dispatch(Action::Stop, ContainerId::new("bbb222"))
        );
        assert_eq!(
            app.handle_key(key(KeyCode::Char('d'))),
            Command::Dispatch(Action::RegenerateDescription, ContainerId::new("bbb222"))
        );
    }

    #[test]
    fn action_keys_do_nothing_without_containers() {
        let mut app = App::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('u'))), Command::None);
    }

    #[test]
    fn selection_wraps() {
        let mut app = loaded_app();
        app.select_previous();
        assert_eq!(app.selected_index, 1);
        app.select_next();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn refresh_keeps_selection_on_same_container() {
        let mut app = loaded_app();
        app.select_next();
        app.set_containers(vec![
            container("ccc333", "cache", "running"),
            container("aaa111", "web", "running"),
            container("bbb222", "db", "running"),
        ]);
        assert_eq!(app.selected().map(|c| c.name.as_str()), Some("db"));
    }

    #[test]
    fn refresh_clamps_selection_when_container_disappears() {
        let mut app = loaded_app();
        app.select_next();
        app.set_containers(vec![container("aaa111", "web", "running")]);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn modal_swallows_keys_until_answered() {
        let mut app = loaded_app();
        let (tx, mut rx) = oneshot::channel();
        app.ask("Are you sure?".into(), tx);

        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Command::None);
        assert!(app.running);
        assert!(app.confirm.is_some());

        let _ = app.handle_key(key(KeyCode::Char('y')));
        assert!(app.confirm.is_none());
        assert_eq!(rx.try_recv(), Ok(true));
    }

    #[test]
    fn ctrl_c_quits_and_declines_open_prompt() {
        let mut app = loaded_app();
        let (tx, mut rx) = oneshot::channel();
        app.ask("Are you sure?".into(), tx);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Command::Quit);
        assert!(!app.running);
        assert!(app.confirm.is_none());
        // Closed without an answer; the asker reads that as declined.
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn escape_declines_modal() {
        let mut app = loaded_app();
        let (tx, mut rx) = oneshot::channel();
        app.ask("Are you sure?".into(), tx);

        let _ = app.handle_key(key(KeyCode::Esc));
        assert_eq!(rx.try_recv(), Ok(false));
    }

    #[test]
    fn second_prompt_is_declined_while_first_is_open() {
        let mut app = loaded_app();
        let (first, _first_rx) = oneshot::channel();
        let (second, mut second_rx) = oneshot::channel();
        app.ask("first".into(), first);
        app.ask("second".into(), second);

        assert_eq!(second_rx.try_recv(), Ok(false));
        assert_eq!(app.confirm.as_ref().map(|c| c.prompt.as_str()), Some("first"));
    }

    #[test]
    fn enter_and_escape_switch_views() {
        let mut app = loaded_app();
        let _ = app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_view, View::ContainerDetail);
        let _ = app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.current_view, View::Dashboard);
    }

    #[test]
    fn quit_keys() {
        let mut app = loaded_app();
        assert_eq!(app.handle_key(key(KeyCode::F(5))), Command::Refresh);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Command::Quit);
        assert!(!app.running);

        let mut app = loaded_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Command::Quit);
    }
}
