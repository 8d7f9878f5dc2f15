use crate::commands::Commands;
use crate::error::Result as ShellResult;
use crate::screens;
use crate::terminal_input::TerminalInput;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use ln_auth::{SessionController, View};
use ln_config::Config;
use ln_provider::{CredentialPrompt, IdentityToolkitFactory};
use ln_store::{CredentialStore, FileCredentialStore};
use log::{debug, info};

/// What a line typed on the current screen asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SignInExternal,
    SignInLocal(String),
    SignOut,
    Quit,
    Ignore,
}

enum Event {
    Input(Option<String>),
    Provider(Option<ln_auth::SessionState>),
}

/// Wires the file store and the provider factory into a controller.
pub fn build_controller(
    config: &Config,
    config_dir: &Path,
    prompt: Arc<dyn CredentialPrompt>,
) -> ShellResult<SessionController> {
    let store_dir = config.storage_dir(config_dir);
    let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::open(&store_dir)?);
    info!("Credential store at {}", store_dir.display());

    let factory = Arc::new(IdentityToolkitFactory::new(
        config.provider.clone(),
        Arc::clone(&store),
        prompt,
    ));

    Ok(SessionController::new(
        factory,
        store,
        config.storage.demo_user_key.clone(),
    ))
}

pub fn parse_input(view: &View, line: &str) -> Action {
    let trimmed = line.trim();

    match view {
        View::SignIn => match trimmed {
            "q" => Action::Quit,
            "g" => Action::SignInExternal,
            _ => Action::SignInLocal(line.to_string()),
        },
        View::Notes(_) => match trimmed {
            "s" => Action::SignOut,
            "q" => Action::Quit,
            _ => Action::Ignore,
        },
    }
}

/// Runs an action against the controller. Returns the message to show, if any.
pub async fn apply_action(controller: &mut SessionController, action: Action) -> Option<String> {
    match action {
        Action::SignInExternal => controller
            .sign_in_external()
            .await
            .err()
            .map(|e| e.user_message()),
        Action::SignInLocal(email) => controller
            .sign_in_local(&email)
            .err()
            .map(|e| e.user_message()),
        Action::SignOut => {
            controller.sign_out().await;
            None
        }
        Action::Quit | Action::Ignore => None,
    }
}

/// The interactive screen loop. Ends on `q` or end of input.
pub async fn run_interactive(
    controller: &mut SessionController,
    input: &TerminalInput,
) -> ShellResult<()> {
    controller.restore_session().await;

    let mut notice: Option<String> = None;
    let mut shown: Option<View> = None;

    loop {
        let view = controller.view();
        if shown.as_ref() != Some(&view) || notice.is_some() {
            print_screen(&screens::render(&view, notice.take().as_deref()))?;
            shown = Some(view);
        }

        let event = tokio::select! {
            line = input.next_line() => Event::Input(line?),
            state = controller.next_update(), if controller.has_subscription() => {
                Event::Provider(state)
            }
        };

        match event {
            Event::Input(None) => {
                debug!("End of input");
                break;
            }
            Event::Input(Some(line)) => match parse_input(&controller.view(), &line) {
                Action::Quit => break,
                action => {
                    notice = apply_action(controller, action).await;
                    // Redraw even when the view is unchanged
                    shown = None;
                }
            },
            Event::Provider(Some(state)) => debug!("Provider update applied: {}", state.label()),
            Event::Provider(None) => {
                info!("Identity provider stopped sending updates");
                controller.teardown();
            }
        }
    }

    Ok(())
}

/// Runs a one-shot command. Returns the text to print.
pub async fn run_command(
    controller: &mut SessionController,
    command: Commands,
    input: &TerminalInput,
) -> ShellResult<Option<String>> {
    match command {
        Commands::Run => {
            run_interactive(controller, input).await?;
            Ok(None)
        }
        Commands::Status => {
            controller.restore_session().await;
            Ok(Some(screens::status_line(&controller.state())))
        }
        Commands::Demo { email } => {
            controller.restore_session().await;
            controller.sign_in_local(&email)?;
            Ok(Some(screens::status_line(&controller.state())))
        }
        Commands::SignIn => {
            controller.restore_session().await;
            controller.sign_in_external().await?;
            Ok(Some(screens::status_line(&controller.state())))
        }
        Commands::SignOut => {
            controller.restore_session().await;
            controller.sign_out().await;
            Ok(Some(screens::status_line(&controller.state())))
        }
    }
}

fn print_screen(screen: &str) -> ShellResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout)?;
    write!(stdout, "{screen}")?;
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
