//! Login form state and field-level error mapping.

use crate::error::SignInError;
use crate::gate::SessionGate;
use crate::provider::IdentityProvider;

/// Outcome of a login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Sign-in succeeded; the gate has been moved to `Authenticated`.
    SignedIn,
    /// One or both fields carry an error message; the form stays up.
    FieldErrors,
    /// An unclassified provider failure; shown as a generic alert, not a
    /// field message.
    Alert(String),
}

/// The login view's state: the two inputs, their error messages, and the
/// show-password toggle.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub show_password: bool,
    username_error: Option<String>,
    password_error: Option<String>,
    signing_in: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username_error(&self) -> Option<&str> {
        self.username_error.as_deref()
    }

    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    pub fn is_signing_in(&self) -> bool {
        self.signing_in
    }

    /// Submit the form: local empty-field checks first, then the provider
    /// sign-in. Failures are mapped onto the field they concern; a failed
    /// attempt clears the in-flight flag so the user can retry. There is no
    /// retry logic here.
    pub async fn submit(
        &mut self,
        provider: &dyn IdentityProvider,
        gate: &mut SessionGate,
    ) -> LoginOutcome {
        self.username_error = None;
        self.password_error = None;

        if self.username.trim().is_empty() {
            self.username_error = Some("No username selected.".to_string());
        }
        if self.password.trim().is_empty() {
            self.password_error = Some("No password selected.".to_string());
        }
        if self.username_error.is_some() || self.password_error.is_some() {
            return LoginOutcome::FieldErrors;
        }

        self.signing_in = true;
        let result = provider.sign_in(self.username.trim(), &self.password).await;
        self.signing_in = false;

        match result {
            Ok(()) => {
                gate.establish();
                tracing::info!("sign-in successful");
                LoginOutcome::SignedIn
            }
            Err(err) => {
                tracing::debug!(error = %err, "sign-in failed");
                self.apply_sign_in_error(err)
            }
        }
    }

    fn apply_sign_in_error(&mut self, err: SignInError) -> LoginOutcome {
        let message = match err {
            SignInError::WrongSecret => {
                self.password_error = Some(
                    "The password you entered is incorrect. Please enter the correct password \
                     and try again."
                        .to_string(),
                );
                return LoginOutcome::FieldErrors;
            }
            SignInError::UnknownIdentifier => {
                "The username you entered is not registered. Please check your username and try \
                 again."
            }
            SignInError::MalformedIdentifier => {
                "The email you entered is not in a valid format. Please enter a valid email \
                 address."
            }
            SignInError::DisabledAccount => "Your account has been disabled.",
            SignInError::ConnectivityFailure => {
                "There was a problem with your network connection. Please check your internet \
                 connection and try again."
            }
            SignInError::OperationNotPermitted => {
                "Sorry, we're unable to process your request at this time. Please try again later."
            }
            SignInError::Other(code) => return LoginOutcome::Alert(code),
        };
        self.username_error = Some(message.to_string());
        LoginOutcome::FieldErrors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingProvider {
        error: SignInError,
    }

    #[async_trait]
    impl IdentityProvider for FailingProvider {
        async fn session_present(&self) -> bool {
            false
        }

        async fn sign_in(&self, _identifier: &str, _secret: &str) -> Result<(), SignInError> {
            Err(self.error.clone())
        }
    }

    struct AcceptingProvider;

    #[async_trait]
    impl IdentityProvider for AcceptingProvider {
        async fn session_present(&self) -> bool {
            false
        }

        async fn sign_in(&self, _identifier: &str, _secret: &str) -> Result<(), SignInError> {
            Ok(())
        }
    }

    async fn anonymous_gate() -> SessionGate {
        let mut gate = SessionGate::new();
        gate.resolve(&AcceptingProvider).await;
        gate
    }

    #[tokio::test]
    async fn test_empty_fields_error_locally_without_provider_call() {
        let mut gate = anonymous_gate().await;
        let mut form = LoginForm::new();

        let outcome = form.submit(&AcceptingProvider, &mut gate).await;

        assert_eq!(outcome, LoginOutcome::FieldErrors);
        assert_eq!(form.username_error(), Some("No username selected."));
        assert_eq!(form.password_error(), Some("No password selected."));
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_successful_sign_in_establishes_session() {
        let mut gate = anonymous_gate().await;
        let mut form = LoginForm::new();
        form.username = "admin".to_string();
        form.password = "hunter2".to_string();

        let outcome = form.submit(&AcceptingProvider, &mut gate).await;

        assert_eq!(outcome, LoginOutcome::SignedIn);
        assert!(gate.is_authenticated());
        assert!(!form.is_signing_in());
    }

    #[tokio::test]
    async fn test_wrong_secret_maps_to_password_field() {
        let mut gate = anonymous_gate().await;
        let mut form = LoginForm::new();
        form.username = "admin".to_string();
        form.password = "wrong".to_string();

        let outcome = form
            .submit(
                &FailingProvider {
                    error: SignInError::WrongSecret,
                },
                &mut gate,
            )
            .await;

        assert_eq!(outcome, LoginOutcome::FieldErrors);
        assert!(form.password_error().is_some());
        assert!(form.username_error().is_none());
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_unknown_identifier_maps_to_username_field() {
        let mut gate = anonymous_gate().await;
        let mut form = LoginForm::new();
        form.username = "ghost".to_string();
        form.password = "pw".to_string();

        let outcome = form
            .submit(
                &FailingProvider {
                    error: SignInError::UnknownIdentifier,
                },
                &mut gate,
            )
            .await;

        assert_eq!(outcome, LoginOutcome::FieldErrors);
        assert!(form.username_error().is_some());
        assert!(form.password_error().is_none());
    }

    #[tokio::test]
    async fn test_unclassified_failure_becomes_alert() {
        let mut gate = anonymous_gate().await;
        let mut form = LoginForm::new();
        form.username = "admin".to_string();
        form.password = "pw".to_string();

        let outcome = form
            .submit(
                &FailingProvider {
                    error: SignInError::Other("auth/too-many-requests".to_string()),
                },
                &mut gate,
            )
            .await;

        assert_eq!(
            outcome,
            LoginOutcome::Alert("auth/too-many-requests".to_string())
        );
        assert!(form.username_error().is_none());
        assert!(form.password_error().is_none());
    }

    #[tokio::test]
    async fn test_failed_attempt_leaves_form_usable() {
        let mut gate = anonymous_gate().await;
        let mut form = LoginForm::new();
        form.username = "admin".to_string();
        form.password = "wrong".to_string();

        form.submit(
            &FailingProvider {
                error: SignInError::WrongSecret,
            },
            &mut gate,
        )
        .await;
        assert!(!form.is_signing_in());

        form.password = "right".to_string();
        let outcome = form.submit(&AcceptingProvider, &mut gate).await;
        assert_eq!(outcome, LoginOutcome::SignedIn);
        assert!(form.password_error().is_none());
    }
}
