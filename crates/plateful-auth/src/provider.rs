//! Identity collaborator seam.

use async_trait::async_trait;

use crate::error::SignInError;

/// The external identity backend. The form never talks to it directly; the
/// gate and login form drive it through this trait.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Startup check: is a session already present? Reported exactly once;
    /// the UI shows a loading state until this resolves.
    async fn session_present(&self) -> bool;

    /// Attempt to sign in. Succeeds with no payload; the caller transitions
    /// session state. Identifier shaping (e.g. mapping a username onto an
    /// account id) is the provider's concern, which is also where
    /// `MalformedIdentifier` originates.
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<(), SignInError>;
}
