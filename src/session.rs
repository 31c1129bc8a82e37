//! Blink API session lifecycle.
//!
//! A [`Session`] carries the client-instance identity (a random UUID) and,
//! once a login reply has been accepted, the account id, client id, and
//! auth token the server issued. The lifecycle is deliberately small:
//! credentials are set together exactly once by [`Session::authed`], and
//! [`Session::close`] clears everything and makes the session permanently
//! inert.
//!
//! Sessions are single-owner and sequential; a caller that shares one
//! across tasks must serialize access itself.

use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// REST endpoint for the production Blink API.
pub const DEFAULT_HOST: &str = "https://rest-prod.immedia-semi.com";

/// A Blink API session: client identity plus, once authenticated, the
/// credentials issued by the server.
#[derive(Debug, Clone)]
pub struct Session {
    host: String,
    uuid: Uuid,
    account_id: u64,
    client_id: u64,
    auth_token: String,
}

impl Session {
    /// Create a session against `host` with the given client-instance
    /// identity. A nil `uuid` means no identity was stored yet and a fresh
    /// random one is generated.
    pub fn new(host: impl Into<String>, uuid: Uuid) -> Self {
        let uuid = if uuid.is_nil() { Uuid::new_v4() } else { uuid };
        Self {
            host: host.into(),
            uuid,
            account_id: 0,
            client_id: 0,
            auth_token: String::new(),
        }
    }

    /// Register the account id, client id, and auth token from an accepted
    /// login reply. All three are set together, exactly once; a session
    /// that already holds any of them fails with
    /// [`ApiError::AlreadyAuthenticated`] and is left unchanged.
    pub fn authed(
        &mut self,
        account_id: u64,
        client_id: u64,
        token: impl Into<String>,
    ) -> ApiResult<()> {
        if self.account_id != 0 || self.client_id != 0 || !self.auth_token.is_empty() {
            return Err(ApiError::AlreadyAuthenticated);
        }
        self.account_id = account_id;
        self.client_id = client_id;
        self.auth_token = token.into();
        Ok(())
    }

    /// End the session, clearing the identity and all credentials. A closed
    /// session is inert; closing it again fails with
    /// [`ApiError::AlreadyClosed`].
    pub fn close(&mut self) -> ApiResult<()> {
        if self.uuid.is_nil() {
            return Err(ApiError::AlreadyClosed);
        }
        self.auth_token.clear();
        self.client_id = 0;
        self.account_id = 0;
        self.uuid = Uuid::nil();
        Ok(())
    }

    /// The session's client-instance identity. Nil once the session has
    /// been closed.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub(crate) fn host(&self) -> &str {
        &self.host
    }

    pub(crate) fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub(crate) fn account_id(&self) -> u64 {
        self.account_id
    }

    pub(crate) fn client_id(&self) -> u64 {
        self.client_id
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_identity_when_nil() {
        let session = Session::new(DEFAULT_HOST, Uuid::nil());
        assert!(!session.uuid().is_nil());
    }

    #[test]
    fn new_keeps_explicit_identity() {
        let id = Uuid::new_v4();
        let session = Session::new(DEFAULT_HOST, id);
        assert_eq!(session.uuid(), id);
    }

    #[test]
    fn authed_sets_all_credentials() {
        let mut session = Session::new(DEFAULT_HOST, Uuid::nil());
        session.authed(1234, 5678, "token").unwrap();
        assert_eq!(session.account_id(), 1234);
        assert_eq!(session.client_id(), 5678);
        assert_eq!(session.auth_token(), "token");
    }

    #[test]
    fn authed_twice_fails_and_leaves_credentials_unchanged() {
        let mut session = Session::new(DEFAULT_HOST, Uuid::nil());
        session.authed(1234, 5678, "token").unwrap();

        let err = session.authed(9999, 8888, "other").unwrap_err();
        assert!(matches!(err, ApiError::AlreadyAuthenticated));
        assert_eq!(session.account_id(), 1234);
        assert_eq!(session.client_id(), 5678);
        assert_eq!(session.auth_token(), "token");
    }

    #[test]
    fn close_clears_identity_and_credentials() {
        let mut session = Session::new(DEFAULT_HOST, Uuid::nil());
        session.authed(1234, 5678, "token").unwrap();

        session.close().unwrap();
        assert!(session.uuid().is_nil());
        assert_eq!(session.account_id(), 0);
        assert_eq!(session.client_id(), 0);
        assert_eq!(session.auth_token(), "");
    }

    #[test]
    fn close_twice_fails() {
        let mut session = Session::new(DEFAULT_HOST, Uuid::nil());
        session.close().unwrap();

        let err = session.close().unwrap_err();
        assert!(matches!(err, ApiError::AlreadyClosed));
    }
}
