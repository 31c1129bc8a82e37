//! Pin verification operation, the second factor after login.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::request::Request;
use crate::session::Session;

use super::account_request;

/// Pin verification payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPin {
    pub pin: String,
}

/// Build an authenticated pin-verification request.
///
/// On the reply, `valid == false` is a terminal authentication failure and
/// the server's `message`/`code` say why; `valid == true` means the session
/// is fully usable.
pub fn verify_pin(session: &Session, pin: &str) -> ApiResult<Request> {
    if pin.is_empty() {
        return Err(ApiError::MissingPin);
    }
    let payload = VerifyPin {
        pin: pin.to_string(),
    };
    account_request(session, "pin/verify", Some(&payload), true)
}

/// Schema for the server's reply to a pin-verification request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VerifyPinReply {
    pub valid: bool,
    pub require_new_pin: bool,
    pub message: String,
    pub code: i32,
}

// ── Tests ───────────────────────────────────────────────────────────
