//! Request construction for the Blink API.
//!
//! A [`Request`] is a fully addressed, headered, serialized POST
//! description. Building one never touches the network; the
//! [`transport`](crate::transport) module (or any caller-provided HTTP
//! client) executes it.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// Header carrying the session's auth token on authenticated endpoints.
pub const AUTH_TOKEN_HEADER: &str = "TOKEN_AUTH";

/// A fully assembled Blink API request. Built once, immutable thereafter;
/// the caller is the sole owner.
#[derive(Debug, Clone)]
pub struct Request {
    /// Fully qualified endpoint URL.
    pub url: String,
    /// Headers to send with the request.
    pub headers: HashMap<String, String>,
    /// Serialized JSON body; empty when the endpoint takes no payload.
    pub body: Vec<u8>,
}

impl Request {
    /// Build a request with no payload.
    pub fn new(session: &Session, path: &str, with_auth: bool) -> ApiResult<Self> {
        Self::build::<()>(session, path, None, with_auth)
    }

    /// Build a request whose body is `payload` serialized as JSON.
    pub fn with_json<T: Serialize>(
        session: &Session,
        path: &str,
        payload: &T,
        with_auth: bool,
    ) -> ApiResult<Self> {
        Self::build(session, path, Some(payload), with_auth)
    }

    fn build<T: Serialize>(
        session: &Session,
        path: &str,
        payload: Option<&T>,
        with_auth: bool,
    ) -> ApiResult<Self> {
        if with_auth && session.auth_token().is_empty() {
            return Err(ApiError::MissingAuthToken);
        }

        let mut headers = HashMap::with_capacity(4);
        let mut body = Vec::new();
        if let Some(payload) = payload {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            body = serde_json::to_vec(payload)?;
        }
        if with_auth {
            headers.insert(
                AUTH_TOKEN_HEADER.to_string(),
                session.auth_token().to_string(),
            );
        }

        Ok(Self {
            url: format!("{}{}", session.host(), path),
            headers,
            body,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_session() -> Session {
        Session::new("https://api.test", Uuid::nil())
    }

    fn authed_session() -> Session {
        let mut session = test_session();
        session.authed(1234, 5678, "session-token").unwrap();
        session
    }

    #[test]
    fn url_is_host_plus_path() {
        let request = Request::new(&test_session(), "/api/v4/account/login", false).unwrap();
        assert_eq!(request.url, "https://api.test/api/v4/account/login");
    }

    #[test]
    fn auth_request_without_token_fails() {
        let err = Request::new(&test_session(), "/anything", true).unwrap_err();
        assert!(matches!(err, ApiError::MissingAuthToken));
    }

    #[test]
    fn auth_request_carries_token_header() {
        let request = Request::new(&authed_session(), "/anything", true).unwrap();
        assert_eq!(
            request.headers.get(AUTH_TOKEN_HEADER).map(String::as_str),
            Some("session-token")
        );
    }

    #[test]
    fn payload_sets_content_type_and_body() {
        #[derive(serde::Serialize)]
        struct Payload {
            pin: String,
        }

        let payload = Payload { pin: "1234".into() };
        let request = Request::with_json(&authed_session(), "/verify", &payload, true).unwrap();
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(request.body, br#"{"pin":"1234"}"#);
    }

    #[test]
    fn no_payload_means_empty_body_and_no_content_type() {
        let request = Request::new(&authed_session(), "/logout", true).unwrap();
        assert!(request.body.is_empty());
        assert!(!request.headers.contains_key("Content-Type"));
    }

    #[test]
    fn unauthenticated_request_has_no_token_header() {
        let request = Request::new(&authed_session(), "/login", false).unwrap();
        assert!(!request.headers.contains_key(AUTH_TOKEN_HEADER));
    }
}
