//! Plateful Auth Library
//!
//! Session gating for the recipe form: a small state machine that decides
//! whether the login view or the form is shown, an `IdentityProvider` trait
//! the real identity backend sits behind, and the login form state with its
//! per-field error mapping.
//!
//! The session is an explicit value (`SessionGate`) handed to whoever needs
//! it; there is no ambient or global session lookup.

pub mod error;
pub mod gate;
pub mod login;
pub mod provider;

pub use error::SignInError;
pub use gate::{SessionGate, SessionState};
pub use login::{LoginForm, LoginOutcome};
pub use provider::IdentityProvider;
