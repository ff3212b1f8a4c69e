use qn_auth::LoginForm;

use super::{SignedInResponse, settle_spinner};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = LoginForm {
        email: args.email.clone(),
        password: args.password.clone(),
        role: args.role,
    };

    let spinner = Progress::spinner("Signing in...");
    let user = settle_spinner(&spinner, form.submit(&mut ctx.session).await)?;

    output(
        &SignedInResponse::new(user, ctx.session.phase()),
        flags.format,
    )
}
