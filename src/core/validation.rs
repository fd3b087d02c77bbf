//! Form field validation rules for login and registration.
//!
//! Every rule is a stateless check returning `Err(FieldError)` on failure.
//! The error's `Display` text is the message shown under the field.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length accepted by the login form.
pub const LOGIN_MIN_PASSWORD_LEN: usize = 6;

/// Minimum password length accepted by the registration form.
pub const REGISTRATION_MIN_PASSWORD_LEN: usize = 8;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is a valid regex")
});

/// Why a form field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Name field is empty or whitespace-only
    #[error("Name cannot be empty")]
    BlankName,

    /// Email does not look like an email address
    #[error("Enter a valid email address")]
    InvalidEmail,

    /// Password is blank or shorter than the form's minimum
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum number of characters the form requires
        min: usize,
    },

    /// Confirmation does not repeat the password
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Rejects a blank name.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::BlankName);
    }
    Ok(())
}

/// Rejects anything that is not shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() || !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Rejects a blank password or one shorter than `min` characters.
pub fn validate_password(password: &str, min: usize) -> Result<(), FieldError> {
    if password.trim().is_empty() || password.chars().count() < min {
        return Err(FieldError::PasswordTooShort { min });
    }
    Ok(())
}

/// Rejects a confirmation that differs from the password.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), FieldError> {
    if password != confirmation {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
