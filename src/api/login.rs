//! Login operation: payload and reply schemas plus the request constructor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::request::Request;
use crate::session::Session;

use super::LOGIN_PATH;

/// Device metadata reported in every login payload.
const DEVICE: &str = "Blonk";
const CLIENT_NAME: &str = "Blonk rust client";

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
    /// Client-instance identity, so the server can tell installs apart.
    pub uuid: Uuid,
    pub device: String,
    pub client_name: String,
}

/// Build an unauthenticated login request.
///
/// After the exchange, pull the account id, client id, and auth token out
/// of the [`LoginReply`] and register them with
/// [`Session::authed`](crate::Session::authed). If the reply flags the
/// account or client as unverified, complete pin verification before
/// treating the session as usable.
pub fn login(session: &Session, email: &str, password: &str) -> ApiResult<Request> {
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::InvalidEmail);
    }
    if password.is_empty() || password.len() > 255 {
        return Err(ApiError::InvalidPassword);
    }

    let payload = Login {
        email: email.to_string(),
        password: password.to_string(),
        uuid: session.uuid(),
        device: DEVICE.to_string(),
        client_name: CLIENT_NAME.to_string(),
    };
    Request::with_json(session, LOGIN_PATH, &payload, false)
}

/// Account block of a login reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccountReply {
    pub id: u64,
    pub verification_required: bool,
    pub new_account: bool,
}

/// Client block of a login reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientReply {
    pub id: u64,
    pub verification_required: bool,
}

/// Auth-token block of a login reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthTokenReply {
    pub authtoken: String,
    pub message: String,
}

/// Schema for the server's reply to a login request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoginReply {
    pub account: AccountReply,
    pub client: ClientReply,
    pub authtoken: AuthTokenReply,
    pub lockout_time_remaining: i64,
    pub force_password_reset: bool,
    pub allow_pin_resend_seconds: i64,
}

impl LoginReply {
    /// Whether the server wants pin verification before the session is
    /// usable. Either the account-level or client-level flag suffices.
    pub fn verification_required(&self) -> bool {
        self.account.verification_required || self.client.verification_required
    }
}

// ── Tests ───────────────────────────────────────────────────────────
