use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

use super::login::LoginError;

/// Account types offered by the login form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl UserRole {
    /// Value submitted by the role `<select>`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }

    /// Human readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::Parent => "Parent",
        }
    }

    /// Dashboard page for this role.
    #[must_use]
    pub const fn dashboard(self) -> &'static str {
        match self {
            Self::Admin => "admin-dashboard.html",
            Self::Teacher => "teacher-dashboard.html",
            Self::Student => "student-dashboard.html",
            Self::Parent => "parent-dashboard.html",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = LoginError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            "parent" => Ok(Self::Parent),
            other => Err(LoginError::UnknownRole(other.to_string())),
        }
    }
}

/// Where a signed-in user would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The dashboard belonging to a known role.
    Dashboard(UserRole),
    /// The declared fallback for anything else; carries the rejected role text.
    Fallback(String),
}

impl Destination {
    /// Resolve the raw role value from the form.
    #[must_use]
    pub fn resolve(user_type: &str) -> Self {
        match user_type.parse::<UserRole>() {
            Ok(role) => Self::Dashboard(role),
            Err(_) => Self::Fallback(user_type.to_string()),
        }
    }

    /// Page path, using `fallback` for unknown roles.
    #[must_use]
    pub fn path<'a>(&self, fallback: &'a str) -> &'a str {
        match self {
            Self::Dashboard(role) => role.dashboard(),
            Self::Fallback(_) => fallback,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("admin", "admin-dashboard.html")]
    #[test_case("teacher", "teacher-dashboard.html")]
    #[test_case("student", "student-dashboard.html")]
    #[test_case("parent", "parent-dashboard.html")]
    fn known_roles_resolve_to_dashboards(role: &str, expected: &str) {
        let destination = Destination::resolve(role);
        assert!(!destination.is_fallback());
        assert_eq!(destination.path("index.html"), expected);
    }

    #[test_case("guest")]
    #[test_case("")]
    #[test_case("Admin")]
    fn unknown_roles_use_fallback(role: &str) {
        let destination = Destination::resolve(role);
        assert_eq!(destination, Destination::Fallback(role.to_string()));
        assert_eq!(destination.path("index.html"), "index.html");
    }

    #[test]
    fn role_text_roundtrip() {
        for role in UserRole::iter() {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn unknown_role_error_names_value() {
        let err = "janitor".parse::<UserRole>().unwrap_err();
        assert_eq!(err, LoginError::UnknownRole("janitor".to_string()));
    }

    #[test]
    fn every_role_has_distinct_dashboard() {
        let mut pages: Vec<_> = UserRole::iter().map(UserRole::dashboard).collect();
        pages.sort_unstable();
        pages.dedup();
        assert_eq!(pages.len(), 4);
    }
}
