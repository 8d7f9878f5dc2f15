use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive sign-in and notes screen (default)
    Run,
    /// Restore and print the current session
    Status,
    /// Sign in as a demo user, without the identity provider
    Demo {
        /// Email for the demo identity
        email: String,
    },
    /// Sign in with the identity provider
    SignIn,
    /// Sign out of the current session
    SignOut,
}
