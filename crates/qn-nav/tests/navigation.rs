//! Router, dispatch and sidebar working together.

use pretty_assertions::assert_eq;
use qn_core::enums::Role;
use qn_nav::{Screen, View, ViewRouter, dispatch, sidebar};
use rstest::rstest;

#[test]
fn teacher_walks_the_sidebar() {
    let mut router = ViewRouter::for_role(Role::Teacher);
    assert_eq!(dispatch(Role::Teacher, &router.view()), Screen::Overview);

    for entry in sidebar(Role::Teacher).entries {
        router.set_view(entry.view.as_str());
        let screen = dispatch(Role::Teacher, &router.view());
        assert!(!screen.is_placeholder(), "{} has no screen", entry.label);

        let menu = sidebar(Role::Teacher).highlight(router.current_view());
        assert_eq!(menu.active().map(|e| e.label), Some(entry.label));
    }
}

#[test]
fn quick_action_opens_create_class() {
    let mut router = ViewRouter::for_role(Role::Teacher);
    let action = &sidebar(Role::Teacher).quick_actions[0];
    router.set_view(action.view.as_str());
    assert_eq!(dispatch(Role::Teacher, &router.view()), Screen::CreateClass);
}

#[test]
fn student_shared_entries_are_placeholders() {
    let mut router = ViewRouter::for_role(Role::Student);
    assert_eq!(dispatch(Role::Student, &router.view()), Screen::StudentProfile);

    for tag in ["classes", "tasks", "group"] {
        router.set_view(tag);
        assert_eq!(
            dispatch(Role::Student, &router.view()),
            Screen::Placeholder { tag: tag.into() }
        );
    }
}

#[rstest]
#[case(Role::Teacher)]
#[case(Role::Student)]
fn dispatch_is_deterministic(#[case] role: Role) {
    for tag in ["dashboard", "profile", "selector", "nope", ""] {
        let view = View::parse(tag);
        assert_eq!(dispatch(role, &view), dispatch(role, &view));
    }
}

#[test]
fn router_round_trips_arbitrary_tags() {
    let mut router = ViewRouter::default();
    for tag in ["groups", "selector", "", "with space", "emoji-🎲"] {
        router.set_view(tag);
        assert_eq!(router.current_view(), tag);
        assert_eq!(router.view().as_str(), tag);
    }
}
