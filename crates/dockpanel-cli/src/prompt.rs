//! Interactive confirmation on the controlling terminal.

use std::io::{BufRead, Write};

use dockpanel_core::Confirm;

/// Asks on stderr and reads the answer from stdin. Anything but `y`/`yes`
/// declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            ask(&prompt, &mut stdin.lock(), &mut std::io::stderr())
        })
        .await
        .unwrap_or(false)
    }
}

fn ask(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> bool {
    if write!(out, "{prompt} [y/N] ").and_then(|()| out.flush()).is_err() {
        return false;
    }
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_yes(&line),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_y_and_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES \n"));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope\n"));
    }

    #[test]
    fn ask_writes_prompt_and_reads_answer() {
        let mut input = std::io::Cursor::new(b"y\n".to_vec());
        let mut out = Vec::new();
        assert!(ask("Stop it?", &mut input, &mut out));
        assert_eq!(String::from_utf8(out).expect("utf8"), "Stop it? [y/N] ");
    }

    #[test]
    fn closed_stdin_declines() {
        let mut input = std::io::Cursor::new(Vec::new());
        assert!(!ask("Update?", &mut input, &mut Vec::new()));
    }
}
