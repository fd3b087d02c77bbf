//! Registration form state.

use crate::{
    core::{
        form::{FieldEvent, FieldState, FormStatus},
        validation::{
            REGISTRATION_MIN_PASSWORD_LEN, validate_email, validate_name, validate_password,
            validate_password_confirmation,
        },
    },
    state::{Observed, Store},
};
use tracing::{debug, info};

use super::dispatch;

/// Form-level message shown when any field is rejected.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors above";

/// Name, email, password and confirmation fields plus the submission status.
#[derive(Debug, Default)]
pub struct RegistrationViewModel {
    name: Store<FieldState>,
    email: Store<FieldState>,
    password: Store<FieldState>,
    confirm_password: Store<FieldState>,
    status: Store<FormStatus>,
}

impl RegistrationViewModel {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name field.
    #[must_use]
    pub const fn name(&self) -> Observed<'_, FieldState> {
        self.name.observe()
    }

    /// Email field.
    #[must_use]
    pub const fn email(&self) -> Observed<'_, FieldState> {
        self.email.observe()
    }

    /// Password field.
    #[must_use]
    pub const fn password(&self) -> Observed<'_, FieldState> {
        self.password.observe()
    }

    /// Password confirmation field.
    #[must_use]
    pub const fn confirm_password(&self) -> Observed<'_, FieldState> {
        self.confirm_password.observe()
    }

    /// Submission status; `Success` is the navigate-away signal.
    #[must_use]
    pub const fn status(&self) -> Observed<'_, FormStatus> {
        self.status.observe()
    }

    /// The user edited the name field.
    pub fn on_name_changed(&self, name: &str) {
        dispatch(&self.name, FieldEvent::Edited(name.to_string()));
    }

    /// The user edited the email field.
    pub fn on_email_changed(&self, email: &str) {
        dispatch(&self.email, FieldEvent::Edited(email.to_string()));
    }

    /// The user edited the password field.
    pub fn on_password_changed(&self, password: &str) {
        dispatch(&self.password, FieldEvent::Edited(password.to_string()));
    }

    /// The user edited the confirmation field.
    pub fn on_confirm_password_changed(&self, confirm_password: &str) {
        dispatch(
            &self.confirm_password,
            FieldEvent::Edited(confirm_password.to_string()),
        );
    }

    /// The user pressed the register button. Every failing field is flagged,
    /// not just the first one.
    pub fn on_register_clicked(&self) {
        for field in self.fields() {
            dispatch(field, FieldEvent::ClearError);
        }

        let name = self.name.with(|field| field.text.clone());
        let email = self.email.with(|field| field.text.clone());
        let password = self.password.with(|field| field.text.clone());
        let confirm_password = self.confirm_password.with(|field| field.text.clone());

        let checks = [
            (&self.name, validate_name(&name)),
            (&self.email, validate_email(&email)),
            (
                &self.password,
                validate_password(&password, REGISTRATION_MIN_PASSWORD_LEN),
            ),
            (
                &self.confirm_password,
                validate_password_confirmation(&password, &confirm_password),
            ),
        ];

        let mut rejected = 0;
        for (field, check) in checks {
            if let Err(error) = check {
                dispatch(field, FieldEvent::Rejected(error));
                rejected += 1;
            }
        }

        if rejected == 0 {
            info!("Registration accepted");
            self.status.set(FormStatus::Success);
        } else {
            debug!(rejected, "Registration rejected by field validation");
            self.status
                .set(FormStatus::Failed(FIX_ERRORS_MESSAGE.to_string()));
        }
    }

    /// Acknowledges the submission result, returning the status to `Idle`.
    pub fn reset_registration_state(&self) {
        self.status.set(FormStatus::Idle);
    }

    const fn fields(&self) -> [&Store<FieldState>; 4] {
        [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
    }
}
