//! Role-aware view dispatch.
//!
//! | role    | tag            | screen           |
//! |---------|----------------|------------------|
//! | teacher | `dashboard`    | `overview`       |
//! | teacher | `classes`      | `class_list`     |
//! | teacher | `students`     | `student_roster` |
//! | teacher | `groups`       | `group_board`    |
//! | teacher | `tasks`        | `task_board`     |
//! | teacher | `events`       | `event_deck`     |
//! | teacher | `selector`     | `magic_selector` |
//! | teacher | `create-class` | `create_class`   |
//! | student | `profile`      | `student_profile`|
//! | either  | anything else  | `placeholder`    |

use qn_core::enums::Role;
use serde::Serialize;

use crate::view::View;

/// The screen to render for a role and view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Overview,
    ClassList,
    StudentRoster,
    GroupBoard,
    TaskBoard,
    EventDeck,
    MagicSelector,
    CreateClass,
    StudentProfile,
    Placeholder { tag: String },
}

impl Screen {
    /// Stable renderer identity.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::ClassList => "class_list",
            Self::StudentRoster => "student_roster",
            Self::GroupBoard => "group_board",
            Self::TaskBoard => "task_board",
            Self::EventDeck => "event_deck",
            Self::MagicSelector => "magic_selector",
            Self::CreateClass => "create_class",
            Self::StudentProfile => "student_profile",
            Self::Placeholder { .. } => "placeholder",
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Overview => "Dashboard".into(),
            Self::ClassList => "My Classes".into(),
            Self::StudentRoster => "Students".into(),
            Self::GroupBoard => "Groups".into(),
            Self::TaskBoard => "Tasks".into(),
            Self::EventDeck => "Events".into(),
            Self::MagicSelector => "Magic Selector".into(),
            Self::CreateClass => "New Class".into(),
            Self::StudentProfile => "My Adventurer Profile".into(),
            Self::Placeholder { tag } => format!("View: {tag}"),
        }
    }

    /// Body text for screens that have no content yet.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Placeholder { tag } => Some(format!("Content for view \"{tag}\" coming soon.")),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Resolve the screen for `role` looking at `view`. Total and deterministic.
#[must_use]
pub fn dispatch(role: Role, view: &View) -> Screen {
    let screen = match (role, view) {
        (Role::Teacher, View::Dashboard) => Screen::Overview,
        (Role::Teacher, View::Classes) => Screen::ClassList,
        (Role::Teacher, View::Students) => Screen::StudentRoster,
        (Role::Teacher, View::Groups) => Screen::GroupBoard,
        (Role::Teacher, View::Tasks) => Screen::TaskBoard,
        (Role::Teacher, View::Events) => Screen::EventDeck,
        (Role::Teacher, View::Selector) => Screen::MagicSelector,
        (Role::Teacher, View::CreateClass) => Screen::CreateClass,
        (Role::Student, View::Profile) => Screen::StudentProfile,
        (_, other) => Screen::Placeholder {
            tag: other.as_str().to_string(),
        },
    };
    tracing::trace!(%role, view = %view, screen = screen.name(), "dispatch");
    screen
}
