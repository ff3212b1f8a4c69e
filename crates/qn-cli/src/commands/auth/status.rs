use qn_core::entities::User;
use qn_core::enums::SessionPhase;
use qn_nav::{ShellScreen, select_shell};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    phase: SessionPhase,
    shell: ShellScreen,
    user: Option<User>,
    restore: &'static str,
    note: Option<String>,
    backend: &'static str,
    transport: &'static str,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = &ctx.session;
    let user = session.current().cloned();

    output(
        &AuthStatusResponse {
            authenticated: user.is_some(),
            phase: session.phase(),
            shell: select_shell(session.phase(), user.as_ref()),
            user,
            restore: ctx.restore.as_str(),
            note: ctx.restore.reason().map(str::to_string),
            backend: session.storage_kind(),
            transport: session.transport_name(),
        },
        flags.format,
    )
}
