
use crate::terminal_input::TerminalInput;

use std::sync::Arc;

use ln_auth::{SessionController, UnavailableProviderFactory};
use ln_store::MemoryCredentialStore;

pub(crate) const DEMO_KEY: &str = "demoUser";

pub(crate) fn demo_controller(store: Arc<MemoryCredentialStore>) -> SessionController {
    SessionController::new(
        Arc::new(UnavailableProviderFactory::new("provider.api_key is not set")),
        store,
        DEMO_KEY,
    )
}

/// Input that replays `script` line by line.
pub(crate) fn scripted_input(script: &'static str, interactive: bool) -> TerminalInput {
    TerminalInput::from_reader(Box::new(script.as_bytes()), interactive)
}
