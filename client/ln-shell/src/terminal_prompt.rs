use crate::terminal_input::TerminalInput;

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ln_provider::{CredentialPrompt, Credentials, PromptOutcome};
use log::warn;

/// What a key press does to a hidden line being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    Continue,
    Submit,
    Cancel,
}

/// Applies one key event to `buffer`. Only presses count.
pub(crate) fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Cancel
        }
        KeyCode::Backspace => {
            buffer.pop();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

/// Raw mode for as long as the guard lives.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Reads one line from the terminal without echoing it. `None` when cancelled.
fn read_hidden_line() -> std::io::Result<Option<String>> {
    let _raw = RawModeGuard::enable()?;
    let mut buffer = String::new();

    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut buffer, key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit => return Ok(Some(buffer)),
                KeyOutcome::Cancel => return Ok(None),
            }
        }
    }
}

/// Asks for provider credentials on the terminal.
pub struct TerminalCredentialPrompt {
    input: Arc<TerminalInput>,
}

impl TerminalCredentialPrompt {
    pub fn new(input: Arc<TerminalInput>) -> Self {
        Self { input }
    }

    async fn ask(&self, label: &str) -> Option<String> {
        print!("{label}");
        let _ = std::io::stdout().flush();

        match self.input.next_line().await {
            Ok(line) => line.filter(|l| !l.trim().is_empty()),
            Err(e) => {
                warn!("Could not read {label}: {e}");
                None
            }
        }
    }

    /// Like `ask`, but typed characters are not echoed on a real terminal.
    async fn ask_hidden(&self, label: &str) -> Option<String> {
        if !self.input.reads_from_terminal() {
            return self.ask(label).await;
        }

        print!("{label}");
        let _ = std::io::stdout().flush();

        let read = tokio::task::spawn_blocking(read_hidden_line).await;
        println!();

        match read {
            Ok(Ok(line)) => line.filter(|l| !l.trim().is_empty()),
            Ok(Err(e)) => {
                warn!("Could not read {label}: {e}");
                None
            }
            Err(e) => {
                warn!("Hidden input task failed: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl CredentialPrompt for TerminalCredentialPrompt {
    async fn request_credentials(&self) -> PromptOutcome {
        if !self.input.is_interactive() {
            return PromptOutcome::Unsupported;
        }

        let Some(email) = self.ask("Email (blank to cancel): ").await else {
            return PromptOutcome::Dismissed;
        };
        let Some(password) = self.ask_hidden("Password: ").await else {
            return PromptOutcome::Dismissed;
        };

        PromptOutcome::Credentials(Credentials::new(email.trim(), password))
    }
}
