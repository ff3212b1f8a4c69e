use clap::{Args, Subcommand};
use qn_core::enums::Role;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and sign in.
    Register(AuthRegisterArgs),
    /// Clear the stored session.
    Logout,
    /// Show the restored session and the screen it leads to.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// teacher or student
    #[arg(long, default_value = "student")]
    pub role: Role,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Display name.
    #[arg(long)]
    pub name: String,
    /// teacher or student
    #[arg(long, default_value = "student")]
    pub role: Role,
}
