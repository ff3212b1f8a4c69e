use qn_core::enums::Role;
use qn_nav::{MenuEntry, View, sidebar};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::view::ViewMenuArgs;
use crate::commands::shared::require_user;
use crate::context::AppContext;
use crate::output::output;

/// One sidebar line, flattened for tabular output.
#[derive(Debug, Serialize)]
pub struct MenuRow {
    pub section: &'static str,
    pub label: &'static str,
    pub view: View,
    pub active: bool,
}

impl MenuRow {
    fn from_entry(section: &'static str, entry: MenuEntry) -> Self {
        Self {
            section,
            label: entry.label,
            view: entry.view,
            active: entry.active,
        }
    }
}

/// Sidebar for `role` with the entry for `current` marked active.
#[must_use]
pub fn menu_rows(role: Role, current: &str) -> Vec<MenuRow> {
    let menu = sidebar(role).highlight(current);
    menu.entries
        .into_iter()
        .map(|entry| MenuRow::from_entry("menu", entry))
        .chain(
            menu.quick_actions
                .into_iter()
                .map(|entry| MenuRow::from_entry("quick_action", entry)),
        )
        .collect()
}

pub fn handle(args: &ViewMenuArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_user(ctx)?;
    let default_view = View::default_for(user.role);
    let current = args.current.as_deref().unwrap_or(default_view.as_str());

    output(&menu_rows(user.role, current), flags.format)
}
