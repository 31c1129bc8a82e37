//! Typed errors for session and request construction.
//!
//! Every failure is surfaced immediately to the caller; nothing is retried
//! or logged inside the library. Transport failures live in
//! [`TransportError`](crate::transport::TransportError) and are kept out of
//! this enum so callers can apply their own policy to network errors.

use thiserror::Error;

/// Result alias for session and request construction.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced while constructing requests or driving the session
/// lifecycle.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login email was empty or not address-shaped.
    #[error("invalid email")]
    InvalidEmail,

    /// Login password was empty or longer than 255 bytes.
    #[error("invalid password")]
    InvalidPassword,

    /// Pin verification was attempted with an empty pin.
    #[error("missing pin")]
    MissingPin,

    /// An authenticated request was built before login completed.
    #[error("missing auth token")]
    MissingAuthToken,

    /// An account-scoped request was built before an account id was known.
    #[error("missing account id")]
    MissingAccountId,

    /// An account-scoped request was built before a client id was known.
    #[error("missing client id")]
    MissingClientId,

    /// [`Session::authed`](crate::Session::authed) was called on a session
    /// that already holds credentials.
    #[error("session already authed")]
    AlreadyAuthenticated,

    /// [`Session::close`](crate::Session::close) was called on a session
    /// that was already closed.
    #[error("session already closed")]
    AlreadyClosed,

    /// A request payload could not be encoded as JSON.
    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
