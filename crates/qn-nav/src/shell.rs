//! Top-level screen selection from session state.

use qn_core::entities::User;
use qn_core::enums::{Role, SessionPhase};
use serde::Serialize;

/// What the application shows before any view is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "shell", rename_all = "snake_case")]
pub enum ShellScreen {
    Loading,
    SignIn,
    Dashboard { role: Role, heading: &'static str },
}

impl ShellScreen {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::SignIn => "sign_in",
            Self::Dashboard { .. } => "dashboard",
        }
    }
}

#[must_use]
pub const fn heading_for(role: Role) -> &'static str {
    match role {
        Role::Teacher => "Teacher Panel",
        Role::Student => "My Adventurer Profile",
    }
}

#[must_use]
pub const fn select_shell(phase: SessionPhase, user: Option<&User>) -> ShellScreen {
    if phase.is_loading() {
        return ShellScreen::Loading;
    }
    match user {
        Some(user) => ShellScreen::Dashboard {
            role: user.role,
            heading: heading_for(user.role),
        },
        None => ShellScreen::SignIn,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(role: Role) -> User {
        User::new("abc123xyz", "a@school.edu", "a", role, Utc::now())
    }

    #[test]
    fn loading_wins_over_user() {
        let teacher = user(Role::Teacher);
        assert_eq!(
            select_shell(SessionPhase::Loading, Some(&teacher)),
            ShellScreen::Loading
        );
        assert_eq!(
            select_shell(SessionPhase::Uninitialized, None),
            ShellScreen::Loading
        );
    }

    #[test]
    fn no_user_means_sign_in() {
        assert_eq!(
            select_shell(SessionPhase::Anonymous, None),
            ShellScreen::SignIn
        );
    }

    #[test]
    fn dashboard_heading_follows_role() {
        let student = user(Role::Student);
        assert_eq!(
            select_shell(SessionPhase::Authenticated, Some(&student)),
            ShellScreen::Dashboard {
                role: Role::Student,
                heading: "My Adventurer Profile"
            }
        );
        assert_eq!(heading_for(Role::Teacher), "Teacher Panel");
    }
}
