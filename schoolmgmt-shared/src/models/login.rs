//! Simulated sign-in flow.
//!
//! The flow has two steps. [`LoginForm::submit`] validates the fields and
//! either rejects them with one alert or yields a [`PendingLogin`]. After the
//! configured delay [`PendingLogin::complete`] produces the success alert and
//! the destination decision. No credentials are checked anywhere.

use thiserror::Error;

use super::user::Destination;

/// Alert shown when a required field is empty.
pub const MISSING_FIELDS_ALERT: &str = "Please fill in all fields";

/// Errors produced by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Username or password was empty.
    #[error("Please fill in all fields")]
    MissingFields,
    /// The role value has no dashboard.
    #[error("unknown user role `{0}`")]
    UnknownRole(String),
}

/// Raw field values read on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub user_type: String,
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Validate the fields.
    ///
    /// Only emptiness is checked; whitespace counts as a value.
    ///
    /// # Errors
    /// [`LoginError::MissingFields`] if the username or password is empty.
    pub fn submit(self) -> Result<PendingLogin, LoginError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(PendingLogin {
            username: self.username,
            user_type: self.user_type,
        })
    }
}

/// A login waiting out the artificial delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    username: String,
    user_type: String,
}

impl PendingLogin {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    /// Finish the simulated sign-in.
    #[must_use]
    pub fn complete(self, fallback: &str) -> LoginOutcome {
        let destination = Destination::resolve(&self.user_type);
        let path = destination.path(fallback).to_string();
        LoginOutcome {
            alert: format!(
                "Login successful! Welcome {} ({})",
                self.username, self.user_type
            ),
            destination,
            path,
        }
    }
}

/// Everything the page does once the delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Success alert text.
    pub alert: String,
    /// Resolved role decision.
    pub destination: Destination,
    /// Page the user would be redirected to.
    pub path: String,
}

/// Visual state of the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitButton {
    #[default]
    Idle,
    Pending,
}

impl SubmitButton {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Login",
            Self::Pending => "Logging in...",
        }
    }

    #[must_use]
    pub const fn disabled(self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use test_case::test_case;

    fn form(user_type: &str, username: &str, password: &str) -> LoginForm {
        LoginForm {
            user_type: user_type.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test_case("", "secret" ; "empty username")]
    #[test_case("ram", "" ; "empty password")]
    #[test_case("", "" ; "both empty")]
    fn empty_fields_are_rejected(username: &str, password: &str) {
        let err = form("student", username, password).submit().unwrap_err();
        assert_eq!(err, LoginError::MissingFields);
        assert_eq!(err.to_string(), MISSING_FIELDS_ALERT);
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        assert!(form("student", " ", " ").submit().is_ok());
    }

    #[test]
    fn success_alert_names_user_and_role() {
        let outcome = form("teacher", "sita", "pw")
            .submit()
            .unwrap()
            .complete("index.html");
        assert_eq!(outcome.alert, "Login successful! Welcome sita (teacher)");
        assert_eq!(outcome.destination, Destination::Dashboard(UserRole::Teacher));
        assert_eq!(outcome.path, "teacher-dashboard.html");
    }

    #[test]
    fn unknown_role_completes_with_fallback() {
        let outcome = form("visitor", "hari", "pw")
            .submit()
            .unwrap()
            .complete("index.html");
        assert!(outcome.destination.is_fallback());
        assert_eq!(outcome.path, "index.html");
        assert_eq!(outcome.alert, "Login successful! Welcome hari (visitor)");
    }

    #[test]
    fn pending_keeps_submitted_values() {
        let pending = form("parent", "gita", "pw").submit().unwrap();
        assert_eq!(pending.username(), "gita");
        assert_eq!(pending.user_type(), "parent");
    }

    #[test]
    fn submit_button_states() {
        assert_eq!(SubmitButton::default(), SubmitButton::Idle);
        assert_eq!(SubmitButton::Idle.label(), "Login");
        assert!(!SubmitButton::Idle.disabled());
        assert_eq!(SubmitButton::Pending.label(), "Logging in...");
        assert!(SubmitButton::Pending.disabled());
    }
}
