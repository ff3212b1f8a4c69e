use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ViewCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, sign out, or inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Resolve dashboard views for the signed-in user.
    View {
        #[command(subcommand)]
        action: ViewCommands,
    },
    /// Interactive dashboard session.
    Shell,
}
