//! Plain-text screens. Rendering returns a `String` so the loop decides where
//! it goes.

use ln_auth::{SessionState, View};
use ln_core::Identity;

pub const APP_TITLE: &str = "📌 Lead Notes";
pub const DEMO_BADGE: &str = "Demo Mode";

pub fn sign_in_screen(notice: Option<&str>) -> String {
    let mut screen = format!(
        "{APP_TITLE}\n\
         Sign in to manage your notes\n\
         \n\
         \x20 [g] Sign in with identity provider\n\
         \x20 ─── OR ───\n\
         \x20 Enter your email (demo mode) to continue as a demo user\n\
         \x20 [q] Quit\n"
    );
    push_notice(&mut screen, notice);
    screen
}

pub fn notes_screen(identity: &Identity, notice: Option<&str>) -> String {
    let mut screen = format!("{APP_TITLE}\n{}\n\n", welcome_line(identity));
    screen.push_str(&notes_placeholder(identity));
    screen.push_str("\n  [s] Sign out   [q] Quit\n");
    push_notice(&mut screen, notice);
    screen
}

pub fn render(view: &View, notice: Option<&str>) -> String {
    match view {
        View::SignIn => sign_in_screen(notice),
        View::Notes(identity) => notes_screen(identity, notice),
    }
}

pub fn welcome_line(identity: &Identity) -> String {
    if identity.is_local {
        format!("Welcome, {}  [{DEMO_BADGE}]", identity.greeting_name())
    } else {
        format!("Welcome, {}", identity.greeting_name())
    }
}

/// One-line session summary for `lead-notes status`.
pub fn status_line(state: &SessionState) -> String {
    match state {
        SessionState::SignedOut => "Signed out".to_string(),
        SessionState::SignedInExternal(identity) => format!(
            "Signed in as {} via identity provider (user {})",
            identity.greeting_name(),
            identity.id
        ),
        SessionState::SignedInLocal(identity) => format!(
            "Signed in as {} ({DEMO_BADGE}, user {})",
            identity.greeting_name(),
            identity.id
        ),
    }
}

// Notes are keyed by the identity id; the notes view itself lives elsewhere.
fn notes_placeholder(identity: &Identity) -> String {
    format!("  Notes for user {}\n", identity.id)
}

fn push_notice(screen: &mut String, notice: Option<&str>) {
    if let Some(notice) = notice {
        screen.push('\n');
        for line in notice.lines() {
            screen.push_str("  ! ");
            screen.push_str(line);
            screen.push('\n');
        }
    }
}
