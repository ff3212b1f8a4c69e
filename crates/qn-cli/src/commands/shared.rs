use qn_core::entities::User;

use crate::context::AppContext;

/// The restored user, or an error telling the caller how to sign in.
pub fn require_user(ctx: &AppContext) -> anyhow::Result<User> {
    if let Some(user) = ctx.session.current() {
        return Ok(user.clone());
    }

    match ctx.restore.reason() {
        Some(reason) => anyhow::bail!(
            "Not signed in (stored session ignored: {reason}). Run 'qn auth login' first."
        ),
        None => anyhow::bail!("Not signed in. Run 'qn auth login' first."),
    }
}
