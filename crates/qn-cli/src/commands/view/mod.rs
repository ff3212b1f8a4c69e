mod menu;
mod show;

pub use menu::menu_rows;
pub use show::ScreenResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ViewCommands;
use crate::context::AppContext;

/// Handle `qn view <subcommand>`.
pub fn handle(action: &ViewCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ViewCommands::Show(args) => show::handle(args, ctx, flags),
        ViewCommands::Menu(args) => menu::handle(args, ctx, flags),
    }
}
