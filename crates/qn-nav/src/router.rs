use qn_core::enums::Role;

use crate::view::View;

/// Holds the single active view tag.
///
/// There is no history: setting a view replaces the previous one. Any string
/// is accepted and returned byte-for-byte by [`ViewRouter::current_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    current: String,
}

impl ViewRouter {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            current: tag.into(),
        }
    }

    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self::new(View::default_for(role).as_str())
    }

    pub fn set_view(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        tracing::trace!(from = %self.current, to = %tag, "view change");
        self.current = tag;
    }

    #[must_use]
    pub fn current_view(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn view(&self) -> View {
        View::parse(&self.current)
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new(View::default().as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(ViewRouter::default().current_view(), "dashboard");
    }

    #[test]
    fn last_set_wins() {
        let mut router = ViewRouter::default();
        router.set_view("groups");
        router.set_view("selector");
        assert_eq!(router.current_view(), "selector");
        assert_eq!(router.view(), View::Selector);
    }

    #[test]
    fn accepts_empty_and_unseen_tags() {
        let mut router = ViewRouter::for_role(Role::Student);
        router.set_view("");
        assert_eq!(router.current_view(), "");
        router.set_view("hall-of-fame");
        assert_eq!(router.view(), View::Unknown("hall-of-fame".into()));
    }

    #[test]
    fn for_role_uses_role_default() {
        assert_eq!(ViewRouter::for_role(Role::Teacher).current_view(), "dashboard");
        assert_eq!(ViewRouter::for_role(Role::Student).current_view(), "profile");
    }
}
