//! # qn-nav
//!
//! Navigation for the Quest Nexus dashboard.
//!
//! A [`ViewRouter`] holds the single active view tag. [`dispatch`] turns that
//! tag and the user's role into the [`Screen`] to render, [`sidebar`] lists
//! the role's menu, and [`select_shell`] picks the top-level screen from the
//! session state. None of it can fail: unknown tags become placeholders.

pub mod dispatch;
pub mod menu;
pub mod router;
pub mod shell;
pub mod view;

pub use dispatch::{Screen, dispatch};
pub use menu::{MenuEntry, Sidebar, sidebar};
pub use router::ViewRouter;
pub use shell::{ShellScreen, select_shell};
pub use view::View;
