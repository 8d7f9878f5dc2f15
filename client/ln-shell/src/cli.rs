use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lead-notes")]
#[command(about = "Lead Notes: sign in to manage your notes")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Config directory (overrides LN_CONFIG_DIR, default ./.ln)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,
}
