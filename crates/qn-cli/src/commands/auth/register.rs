use qn_auth::RegisterForm;

use super::{SignedInResponse, settle_spinner};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = RegisterForm {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        role: args.role,
    };

    let spinner = Progress::spinner("Creating account...");
    let user = settle_spinner(&spinner, form.submit(&mut ctx.session).await)?;

    output(
        &SignedInResponse::new(user, ctx.session.phase()),
        flags.format,
    )
}
