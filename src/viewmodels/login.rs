//! Login form state.
//!
//! Submission validates synchronously, then awaits an [`Authenticator`]. The
//! status moves `Idle -> Submitting -> Success | Failed`, and the result only
//! becomes visible once the authenticator has answered. The caller navigates
//! on `Success` and then calls [`LoginViewModel::reset_login_state`].

use crate::{
    config::login::LoginSettings,
    core::{
        form::{FieldEvent, FieldState, FormStatus},
        validation::{LOGIN_MIN_PASSWORD_LEN, validate_email, validate_password},
    },
    state::{Observed, Store},
};
use tracing::{debug, info, warn};

use super::dispatch;

/// Form-level message for a well-formed but wrong email/password pair.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

/// Checks a set of credentials. Stands in for a future account backend.
///
/// Implementors are `Sync` so a pending login can move across threads.
pub trait Authenticator: Sync {
    /// Whether the credentials are accepted.
    fn authenticate(&self, email: &str, password: &str) -> impl Future<Output = bool> + Send;
}

/// Accepts exactly the configured demo credentials after the configured delay.
#[derive(Debug, Clone, Default)]
pub struct DemoAuthenticator {
    settings: LoginSettings,
}

impl DemoAuthenticator {
    /// Creates an authenticator for the given settings.
    #[must_use]
    pub const fn new(settings: LoginSettings) -> Self {
        Self { settings }
    }
}

impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> bool {
        if !self.settings.latency.is_zero() {
            tokio::time::sleep(self.settings.latency).await;
        }
        email == self.settings.email && password == self.settings.password
    }
}

/// Email and password fields plus the submission status.
#[derive(Debug)]
pub struct LoginViewModel<A = DemoAuthenticator> {
    authenticator: A,
    email: Store<FieldState>,
    password: Store<FieldState>,
    status: Store<FormStatus>,
}

impl<A: Authenticator> LoginViewModel<A> {
    /// Empty form using the given authenticator.
    #[must_use]
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            email: Store::default(),
            password: Store::default(),
            status: Store::default(),
        }
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

    /// Submission status; `Success` is the navigate-away signal.
    #[must_use]
    pub const fn status(&self) -> Observed<'_, FormStatus> {
        self.status.observe()
    }

    /// The user edited the email field.
    pub fn on_email_changed(&self, email: &str) {
        dispatch(&self.email, FieldEvent::Edited(email.to_string()));
        self.clear_failure();
    }

    /// The user edited the password field.
    pub fn on_password_changed(&self, password: &str) {
        dispatch(&self.password, FieldEvent::Edited(password.to_string()));
        self.clear_failure();
    }

    /// The user pressed the login button.
    ///
    /// Invalid fields are flagged and a finished earlier result drops back to
    /// `Idle`, so a stale `Success` is never read as this attempt's outcome.
    /// Valid input is sent to the authenticator; `status` reads `Submitting` until it
    /// answers. A press while a submission is in flight is ignored.
    pub async fn on_login_clicked(&self) {
        if self.status.with(|status| *status == FormStatus::Submitting) {
            debug!("Login already in flight, ignoring click");
            return;
        }

        dispatch(&self.email, FieldEvent::ClearError);
        dispatch(&self.password, FieldEvent::ClearError);

        let email = self.email.with(|field| field.text.clone());
        let password = self.password.with(|field| field.text.clone());

        let mut is_valid = true;
        if let Err(error) = validate_email(&email) {
            dispatch(&self.email, FieldEvent::Rejected(error));
            is_valid = false;
        }
        if let Err(error) = validate_password(&password, LOGIN_MIN_PASSWORD_LEN) {
            dispatch(&self.password, FieldEvent::Rejected(error));
            is_valid = false;
        }

        if !is_valid {
            debug!("Login rejected by field validation");
            self.settle_to_idle(FormStatus::is_terminal);
            return;
        }

        self.status.set(FormStatus::Submitting);
        let accepted = self.authenticator.authenticate(&email, &password).await;

        if accepted {
            info!("Login succeeded");
            self.status.set(FormStatus::Success);
        } else {
            warn!("Login failed: credentials not accepted");
            self.status
                .set(FormStatus::Failed(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }
    }

    /// Acknowledges a finished submission, returning the status to `Idle`.
    /// Has no effect while a submission is still in flight.
    pub fn reset_login_state(&self) {
        if self.settle_to_idle(FormStatus::is_terminal) {
            debug!("Login status reset");
        }
    }

    fn clear_failure(&self) {
        if self.settle_to_idle(|status| matches!(status, FormStatus::Failed(_))) {
            debug!("Login failure cleared by edit");
        }
    }

    /// Moves the status to `Idle` if `applies` holds, notifying only then.
    fn settle_to_idle(&self, applies: impl FnOnce(&FormStatus) -> bool) -> bool {
        self.status.update_if(|status| {
            if applies(status) {
                *status = FormStatus::Idle;
                true
            } else {
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{GatedAuthenticator, init_test_tracing, instant_login};
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_valid_credentials_succeed() {
        init_test_tracing();
        let model = instant_login();
        model.on_email_changed("admin@pet.cl");
        model.on_password_changed("123456");

        model.on_login_clicked().await;

        assert!(model.status().get().is_success());
        assert!(!model.email().get().is_error);
        assert!(!model.password().get().is_error);
    }

    #[tokio::test]
    async fn test_wrong_credentials_fail() {
        let model = instant_login();
        model.on_email_changed("admin@pet.cl");
        model.on_password_changed("654321");

        model.on_login_clicked().await;

        assert_eq!(
            model.status().get(),
            FormStatus::Failed(INVALID_CREDENTIALS_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_email_never_succeeds() {
        for password in ["123456", "short", ""] {
            let model = instant_login();
            model.on_email_changed("admin-at-pet.cl");
            model.on_password_changed(password);

            model.on_login_clicked().await;

            let email = model.email().get();
            assert!(email.is_error);
            assert_eq!(email.error_message, "Enter a valid email address");
            assert_eq!(model.status().get(), FormStatus::Idle);
        }
    }

    #[tokio::test]
    async fn test_short_password_flagged() {
        let model = instant_login();
        model.on_email_changed("admin@pet.cl");
        model.on_password_changed("12345");

        model.on_login_clicked().await;

        assert!(!model.email().get().is_error);
        let password = model.password().get();
        assert!(password.is_error);
        assert_eq!(password.error_message, "Password must be at least 6 characters");
        assert_eq!(model.status().get(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_editing_clears_errors() {
        let model = instant_login();
        model.on_email_changed("nope");
        model.on_password_changed("1");
        model.on_login_clicked().await;
        assert!(model.email().get().is_error);

        model.on_email_changed("nope@pet.cl");
        assert!(!model.email().get().is_error);
        assert!(model.password().get().is_error);

        model.on_password_changed("1234567");
        assert!(!model.password().get().is_error);
    }

    #[tokio::test]
    async fn test_editing_clears_credential_failure() {
        let model = instant_login();
        model.on_email_changed("someone@pet.cl");
        model.on_password_changed("123456");
        model.on_login_clicked().await;
        assert!(model.status().get().error_message().is_some());

        model.on_password_changed("1234567");
        assert_eq!(model.status().get(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_result_only_visible_after_authenticator_answers() {
        let gate = Arc::new(Notify::new());
        let model = LoginViewModel::new(GatedAuthenticator::new(Arc::clone(&gate), true));
        model.on_email_changed("admin@pet.cl");
        model.on_password_changed("123456");
        let mut receiver = model.status().subscribe();

        let observer = async {
            receiver
                .wait_for(|status| *status == FormStatus::Submitting)
                .await
                .unwrap();

            // A second click and a reset while in flight change nothing
            model.on_login_clicked().await;
            model.reset_login_state();
            assert_eq!(model.status().get(), FormStatus::Submitting);

            gate.notify_one();
        };
        tokio::join!(model.on_login_clicked(), observer);

        assert_eq!(model.status().get(), FormStatus::Success);
    }

    #[tokio::test]
    async fn test_success_is_one_shot() {
        let model = instant_login();
        let mut receiver = model.status().subscribe();
        model.on_email_changed("admin@pet.cl");
        model.on_password_changed("123456");

        model.on_login_clicked().await;
        assert!(receiver.has_changed().unwrap());
        assert!(receiver.borrow_and_update().is_success());

        model.reset_login_state();
        assert_eq!(*receiver.borrow_and_update(), FormStatus::Idle);

        // Nothing left to observe until the next submission
        model.reset_login_state();
        assert!(!receiver.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_invalid_resubmit_clears_previous_success() {
        let model = instant_login();
        model.on_email_changed("admin@pet.cl");
        model.on_password_changed("123456");
        model.on_login_clicked().await;
        assert!(model.status().get().is_success());

        // Success not yet acknowledged when the user submits a broken form
        model.on_password_changed("123");
        model.on_login_clicked().await;

        assert!(model.password().get().is_error);
        assert_eq!(model.status().get(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_invalid_submit_from_idle_sends_no_status_change() {
        let model = instant_login();
        let mut receiver = model.status().subscribe();
        model.on_email_changed("nope");

        model.on_login_clicked().await;

        assert!(model.email().get().is_error);
        assert!(!receiver.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_demo_authenticator_latency() {
        let settings = LoginSettings {
            latency: std::time::Duration::from_millis(5),
            ..LoginSettings::default()
        };
        let authenticator = DemoAuthenticator::new(settings);

        let started = std::time::Instant::now();
        assert!(authenticator.authenticate("admin@pet.cl", "123456").await);
        assert!(started.elapsed() >= std::time::Duration::from_millis(5));
        assert!(!authenticator.authenticate("admin@pet.cl", "1234567").await);
    }
}
