//! Blonk — session management and authenticated request construction for
//! the Blink home-security-camera REST API.
//!
//! The crate is split the way the API is used:
//! - [`Session`] tracks the client identity and the credentials issued at
//!   login (unauthenticated → authenticated → closed).
//! - [`Request`] values are fully addressed, headered, serialized POST
//!   descriptions; building one performs no I/O.
//! - [`api`] holds the typed payload/reply schemas and one constructor per
//!   operation: login, logout, and pin verification.
//! - [`Transport`] executes a built request and decodes the JSON reply.
//! - [`Config`] is the small YAML record the CLI persists between runs.
//!
//! # Flow
//!
//! 1. Create a [`Session`] — a fresh identity is generated if none is given.
//! 2. Build a login request with [`login`], send it, and register the
//!    reply's credentials via [`Session::authed`].
//! 3. If the reply flags the account or client as unverified, build and
//!    send a pin-verification request with [`verify_pin`]; a reply with
//!    `valid == false` is a terminal authentication failure.
//! 4. [`logout`] ends the server-side session; [`Session::close`] clears
//!    the local one.
//!
//! # Example
//!
//! ```no_run
//! use blonk::{api, Session, Transport, DEFAULT_HOST};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let mut session = Session::new(DEFAULT_HOST, uuid::Uuid::nil());
//!     let transport = Transport::new()?;
//!
//!     let request = api::login::login(&session, "a@b.com", "hunter2")?;
//!     let reply: api::login::LoginReply = transport.send(&request).await?;
//!     session.authed(reply.account.id, reply.client.id, reply.authtoken.authtoken)?;
//!
//!     if reply.account.verification_required || reply.client.verification_required {
//!         let request = api::verify::verify_pin(&session, "123456")?;
//!         let result: api::verify::VerifyPinReply = transport.send(&request).await?;
//!         anyhow::ensure!(result.valid, "pin rejected: {}", result.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod session;
pub mod transport;

pub use api::login::{login, Login, LoginReply};
pub use api::logout::{logout, LogoutReply};
pub use api::verify::{verify_pin, VerifyPin, VerifyPinReply};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use request::{Request, AUTH_TOKEN_HEADER};
pub use session::{Session, DEFAULT_HOST};
pub use transport::{Transport, TransportError};
