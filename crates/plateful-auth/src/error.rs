//! Sign-in failure classification.

/// The closed set of sign-in failure reasons the gate understands. Anything
/// the provider cannot classify arrives as `Other` and is surfaced as a
/// generic alert rather than a field message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("incorrect password")]
    WrongSecret,

    #[error("unknown account")]
    UnknownIdentifier,

    #[error("malformed identifier")]
    MalformedIdentifier,

    #[error("account disabled")]
    DisabledAccount,

    #[error("network failure")]
    ConnectivityFailure,

    #[error("operation not permitted")]
    OperationNotPermitted,

    #[error("sign-in failed: {0}")]
    Other(String),
}
