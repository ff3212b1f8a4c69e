mod login;
mod logout;
mod register;
mod status;

use qn_auth::AuthError;
use qn_core::entities::User;
use qn_core::enums::SessionPhase;
use qn_nav::{ShellScreen, View, select_shell};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::progress::Progress;

/// Handle `qn auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Register(args) => register::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}

#[derive(Serialize)]
struct SignedInResponse {
    authenticated: bool,
    user: User,
    shell: ShellScreen,
    landing_view: View,
}

impl SignedInResponse {
    fn new(user: User, phase: SessionPhase) -> Self {
        Self {
            authenticated: true,
            shell: select_shell(phase, Some(&user)),
            landing_view: View::default_for(user.role),
            user,
        }
    }
}

/// Clear or abandon the spinner depending on how the attempt went.
fn settle_spinner(spinner: &Progress, result: Result<User, AuthError>) -> anyhow::Result<User> {
    match result {
        Ok(user) => {
            spinner.finish_clear();
            Ok(user)
        }
        Err(error) => {
            spinner.finish_err("failed");
            Err(error.into())
        }
    }
}
