//! Role-dependent sidebar.

use qn_core::enums::Role;
use serde::Serialize;

use crate::view::View;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub view: View,
    pub active: bool,
}

impl MenuEntry {
    const fn new(label: &'static str, view: View) -> Self {
        Self {
            label,
            view,
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub role: Role,
    pub entries: Vec<MenuEntry>,
    pub quick_actions: Vec<MenuEntry>,
}

impl Sidebar {
    /// Mark the entry whose view tag equals `current` as active.
    #[must_use]
    pub fn highlight(mut self, current: &str) -> Self {
        for entry in &mut self.entries {
            entry.active = entry.view.as_str() == current;
        }
        self
    }

    #[must_use]
    pub fn active(&self) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.active)
    }
}

/// Menu entries for `role`, none active.
#[must_use]
pub fn sidebar(role: Role) -> Sidebar {
    let (entries, quick_actions) = match role {
        Role::Teacher => (
            vec![
                MenuEntry::new("Dashboard", View::Dashboard),
                MenuEntry::new("My Classes", View::Classes),
                MenuEntry::new("Students", View::Students),
                MenuEntry::new("Groups", View::Groups),
                MenuEntry::new("Tasks", View::Tasks),
                MenuEntry::new("Events", View::Events),
                MenuEntry::new("Magic Selector", View::Selector),
            ],
            vec![MenuEntry::new("New Class", View::CreateClass)],
        ),
        Role::Student => (
            vec![
                MenuEntry::new("My Profile", View::Profile),
                MenuEntry::new("My Classes", View::Classes),
                MenuEntry::new("My Tasks", View::Tasks),
                MenuEntry::new("My Group", View::Group),
            ],
            Vec::new(),
        ),
    };

    Sidebar {
        role,
        entries,
        quick_actions,
    }
}
