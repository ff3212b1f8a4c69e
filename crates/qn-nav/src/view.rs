//! Known view tags.

use std::fmt;

use qn_core::enums::Role;
use serde::{Serialize, Serializer};

/// A view tag, parsed.
///
/// Parsing never fails. Tags outside the known set are kept verbatim in
/// [`View::Unknown`], so `View::parse(tag).as_str() == tag` for every input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Classes,
    Students,
    Groups,
    Tasks,
    Events,
    Selector,
    CreateClass,
    Profile,
    Group,
    Unknown(String),
}

impl View {
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "dashboard" => Self::Dashboard,
            "classes" => Self::Classes,
            "students" => Self::Students,
            "groups" => Self::Groups,
            "tasks" => Self::Tasks,
            "events" => Self::Events,
            "selector" => Self::Selector,
            "create-class" => Self::CreateClass,
            "profile" => Self::Profile,
            "group" => Self::Group,
            other => Self::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Classes => "classes",
            Self::Students => "students",
            Self::Groups => "groups",
            Self::Tasks => "tasks",
            Self::Events => "events",
            Self::Selector => "selector",
            Self::CreateClass => "create-class",
            Self::Profile => "profile",
            Self::Group => "group",
            Self::Unknown(tag) => tag,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Where a freshly signed-in user of `role` lands.
    #[must_use]
    pub const fn default_for(role: Role) -> Self {
        match role {
            Role::Teacher => Self::Dashboard,
            Role::Student => Self::Profile,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for View {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl Serialize for View {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
