//! User-facing alert notices.
//!
//! Core never renders alerts; it hands title/message pairs to the host.

use serde::{Deserialize, Serialize};

pub const FETCH_FAILED_TITLE: &str = "Error";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";
pub const INVALID_CREDENTIALS_TITLE: &str = "Error";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const FORGOT_PASSWORD_TITLE: &str = "Forgot Password";
pub const FORGOT_PASSWORD_MESSAGE: &str = "Feature coming soon!";

/// Title/message pair the host shows as a modal alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Alert shown when recipe retrieval fails.
    pub fn fetch_failed() -> Self {
        Self::new(FETCH_FAILED_TITLE, FETCH_FAILED_MESSAGE)
    }

    /// Alert shown when a login pair is not on the allow-list.
    pub fn invalid_credentials() -> Self {
        Self::new(INVALID_CREDENTIALS_TITLE, INVALID_CREDENTIALS_MESSAGE)
    }

    /// Placeholder notice for the login screen's password reset link.
    pub fn forgot_password() -> Self {
        Self::new(FORGOT_PASSWORD_TITLE, FORGOT_PASSWORD_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::Alert;

    #[test]
    fn fixed_alert_texts() {
        assert_eq!(
            Alert::fetch_failed(),
            Alert::new("Error", "Failed to fetch recipes. Please try again.")
        );
        assert_eq!(
            Alert::invalid_credentials(),
            Alert::new("Error", "Invalid credentials")
        );
        assert_eq!(
            Alert::forgot_password(),
            Alert::new("Forgot Password", "Feature coming soon!")
        );
    }
}
