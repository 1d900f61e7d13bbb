//! Session gate state machine.

use crate::provider::IdentityProvider;

/// Process-wide session state.
///
/// `Checking` is the initial state while the startup identity check is in
/// flight. It resolves exactly once, to `Authenticated` or `Anonymous`.
/// After that the only transition is `Anonymous -> Authenticated` on a
/// successful sign-in; there is no sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Checking,
    Anonymous,
    Authenticated,
}

/// Owns the one session value. Passed explicitly to whatever needs it.
#[derive(Debug)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    pub fn new() -> Self {
        SessionGate {
            state: SessionState::Checking,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Whether the startup check has not resolved yet (loading view).
    pub fn is_checking(&self) -> bool {
        self.state == SessionState::Checking
    }

    /// Drive the one-time startup resolution. A second call leaves the
    /// already-resolved state untouched.
    pub async fn resolve(&mut self, provider: &dyn IdentityProvider) -> SessionState {
        if self.state != SessionState::Checking {
            tracing::warn!(state = ?self.state, "session gate resolved twice; ignoring");
            return self.state;
        }

        self.state = if provider.session_present().await {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };

        tracing::debug!(state = ?self.state, "session gate resolved");
        self.state
    }

    /// Record a successful sign-in: `Anonymous -> Authenticated`.
    pub fn establish(&mut self) {
        self.state = SessionState::Authenticated;
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignInError;
    use async_trait::async_trait;

    struct StubProvider {
        present: bool,
    }

    #[async_trait]
    impl IdentityProvider for StubProvider {
        async fn session_present(&self) -> bool {
            self.present
        }

        async fn sign_in(&self, _identifier: &str, _secret: &str) -> Result<(), SignInError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_resolves_to_authenticated_when_session_present() {
        let mut gate = SessionGate::new();
        assert!(gate.is_checking());

        let state = gate.resolve(&StubProvider { present: true }).await;
        assert_eq!(state, SessionState::Authenticated);
        assert!(gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_resolves_to_anonymous_when_no_session() {
        let mut gate = SessionGate::new();
        let state = gate.resolve(&StubProvider { present: false }).await;
        assert_eq!(state, SessionState::Anonymous);
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_establish_after_anonymous() {
        let mut gate = SessionGate::new();
        gate.resolve(&StubProvider { present: false }).await;
        gate.establish();
        assert!(gate.is_authenticated());
    }
}
