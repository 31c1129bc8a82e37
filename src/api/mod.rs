//! Typed operations for the Blink authentication API.
//!
//! Each operation validates its inputs, builds a JSON payload, and
//! assembles a [`Request`] via the request builder; none of them perform
//! I/O. Feed the built request to
//! [`Transport::send`](crate::transport::Transport::send) (or your own HTTP
//! client) and deserialize the raw reply into the matching reply schema.

pub mod login;
pub mod logout;
pub mod verify;

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::request::Request;
use crate::session::Session;

/// Unauthenticated login endpoint.
pub(crate) const LOGIN_PATH: &str = "/api/v4/account/login";

/// Build a request against an account/client-scoped endpoint. Fails unless
/// the session already knows its account and client ids.
fn account_request<T: Serialize>(
    session: &Session,
    suffix: &str,
    payload: Option<&T>,
    with_auth: bool,
) -> ApiResult<Request> {
    if session.account_id() == 0 {
        return Err(ApiError::MissingAccountId);
    }
    if session.client_id() == 0 {
        return Err(ApiError::MissingClientId);
    }
    let path = format!(
        "/api/v4/account/{}/client/{}/{}",
        session.account_id(),
        session.client_id(),
        suffix
    );
    match payload {
        Some(payload) => Request::with_json(session, &path, payload, with_auth),
        None => Request::new(session, &path, with_auth),
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn account_request_requires_account_id() {
        let session = Session::new("https://api.test", Uuid::nil());
        let err = account_request::<()>(&session, "logout", None, true).unwrap_err();
        assert!(matches!(err, ApiError::MissingAccountId));
    }

    #[test]
    fn account_request_formats_scoped_path() {
        let mut session = Session::new("https://api.test", Uuid::nil());
        session.authed(42, 7, "token").unwrap();

        let request = account_request::<()>(&session, "pin/verify", None, true).unwrap();
        assert_eq!(
            request.url,
            "https://api.test/api/v4/account/42/client/7/pin/verify"
        );
    }
}
