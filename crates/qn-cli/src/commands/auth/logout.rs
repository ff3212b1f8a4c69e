use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    was_signed_in: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_signed_in = ctx.session.current().is_some();
    ctx.session.logout()?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            was_signed_in,
        },
        flags.format,
    )
}
