//! Logout operation.

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::request::Request;
use crate::session::Session;

use super::account_request;

/// Build an authenticated logout request for the session's account and
/// client. The endpoint takes no payload.
pub fn logout(session: &Session) -> ApiResult<Request> {
    account_request::<()>(session, "logout", None, true)
}

/// Schema for the server's reply to a logout request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogoutReply {
    pub message: String,
}

// ── Tests ───────────────────────────────────────────────────────────
