//! Credential allow-list and login form validation.

use crate::model::alert::{Alert, INVALID_CREDENTIALS_MESSAGE};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

const DEMO_USERS: [(&str, &str); 3] = [
    ("admin", "admin123"),
    ("chef", "chef123"),
    ("guest", "guest123"),
];

/// Per-field validation messages for the login form.
///
/// At least one field is set whenever this error is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl ValidationError {
    fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = [self.username, self.password]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}

impl Error for ValidationError {}

/// Login failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// A required field is blank; shown inline next to the field.
    Validation(ValidationError),
    /// The pair is not on the allow-list.
    InvalidCredentials,
}

impl LoginError {
    /// Modal alert for this failure, if it is shown as one.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::Validation(_) => None,
            Self::InvalidCredentials => Some(Alert::invalid_credentials()),
        }
    }
}

impl Display for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidCredentials => f.write_str(INVALID_CREDENTIALS_MESSAGE),
        }
    }
}

impl Error for LoginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidCredentials => None,
        }
    }
}

impl From<ValidationError> for LoginError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Checks that both fields contain non-whitespace text.
pub fn validate_login_form(username: &str, password: &str) -> Result<(), ValidationError> {
    let errors = ValidationError {
        username: username.trim().is_empty().then_some(USERNAME_REQUIRED),
        password: password.trim().is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Static username/password allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialStore {
    users: Vec<(String, String)>,
}

impl CredentialStore {
    pub fn new<U, P>(users: impl IntoIterator<Item = (U, P)>) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: users
                .into_iter()
                .map(|(username, password)| (username.into(), password.into()))
                .collect(),
        }
    }

    /// Built-in demo accounts.
    pub fn demo() -> Self {
        Self::new(DEMO_USERS)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Validates the form and looks up the exact pair.
    ///
    /// Matching is exact; surrounding whitespace is significant once the
    /// non-empty check has passed.
    ///
    /// # Errors
    /// - `LoginError::Validation` when a field is blank.
    /// - `LoginError::InvalidCredentials` when the pair is unknown.
    pub fn login(&self, username: &str, password: &str) -> Result<String, LoginError> {
        validate_login_form(username, password)?;

        let found = self.users.iter().find(|(known_user, known_password)| {
            known_user == username && known_password == password
        });

        match found {
            Some((known_user, _)) => {
                info!("event=login module=auth status=ok");
                Ok(known_user.clone())
            }
            None => {
                info!(
                    "event=login module=auth status=rejected username_len={}",
                    username.len()
                );
                Err(LoginError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_login_form, PASSWORD_REQUIRED, USERNAME_REQUIRED};

    #[test]
    fn validation_reports_each_blank_field() {
        let err = validate_login_form("  ", "").expect_err("both blank");
        assert_eq!(err.username, Some(USERNAME_REQUIRED));
        assert_eq!(err.password, Some(PASSWORD_REQUIRED));
        assert_eq!(err.to_string(), "Username is required; Password is required");
    }

    #[test]
    fn validation_passes_non_blank_fields() {
        assert!(validate_login_form("chef", "x").is_ok());
    }
}
