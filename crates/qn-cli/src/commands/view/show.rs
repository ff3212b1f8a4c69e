use qn_core::entities::User;
use qn_core::enums::Role;
use qn_nav::{ViewRouter, dispatch, shell::heading_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::view::ViewShowArgs;
use crate::commands::shared::require_user;
use crate::context::AppContext;
use crate::output::output;

/// What the dashboard shows for one role and view.
#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub role: Role,
    pub heading: &'static str,
    pub view: String,
    pub screen: &'static str,
    pub title: String,
    pub message: Option<String>,
}

impl ScreenResponse {
    #[must_use]
    pub fn resolve(user: &User, router: &ViewRouter) -> Self {
        let screen = dispatch(user.role, &router.view());
        Self {
            role: user.role,
            heading: heading_for(user.role),
            view: router.current_view().to_string(),
            screen: screen.name(),
            title: screen.title(),
            message: screen.message(),
        }
    }
}

pub fn handle(args: &ViewShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = require_user(ctx)?;

    let mut router = ViewRouter::for_role(user.role);
    if let Some(tag) = &args.tag {
        router.set_view(tag.as_str());
    }

    output(&ScreenResponse::resolve(&user, &router), flags.format)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(role: Role) -> User {
        User::new("abc123xyz", "bob@school.edu", "bob", role, Utc::now())
    }

    #[test]
    fn teacher_default_is_overview() {
        let teacher = user(Role::Teacher);
        let response = ScreenResponse::resolve(&teacher, &ViewRouter::for_role(Role::Teacher));
        assert_eq!(response.view, "dashboard");
        assert_eq!(response.screen, "overview");
        assert_eq!(response.heading, "Teacher Panel");
        assert_eq!(response.message, None);
    }

    #[test]
    fn student_sidebar_tag_is_placeholder() {
        let student = user(Role::Student);
        let mut router = ViewRouter::for_role(Role::Student);
        router.set_view("tasks");

        let response = ScreenResponse::resolve(&student, &router);
        assert_eq!(response.screen, "placeholder");
        assert_eq!(
            response.message.as_deref(),
            Some("Content for view \"tasks\" coming soon.")
        );
    }
}
