use clap::{Args, Subcommand};

/// Navigation commands. All of them need a signed-in user.
#[derive(Clone, Debug, Subcommand)]
pub enum ViewCommands {
    /// Resolve the screen for a view tag.
    Show(ViewShowArgs),
    /// List the sidebar menu.
    Menu(ViewMenuArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ViewShowArgs {
    /// View tag (defaults to the role's landing view).
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ViewMenuArgs {
    /// Mark the entry for this tag as active.
    #[arg(long)]
    pub current: Option<String>,
}
