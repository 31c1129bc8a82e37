//! Blonk CLI — log in to the Blink API, complete pin verification when the
//! server asks for it, and log out again.
//!
//! Credentials and the client identity live in a small YAML config file
//! (default `.blonk.rc`); command-line flags override config values but are
//! never written back, except for the identity generated on first run and
//! the token issued by a successful login.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use blonk::{api, Config, Session, Transport, DEFAULT_HOST};

#[derive(Debug, Parser)]
#[command(
    name = "blonk",
    about = "Authentication client for the Blink home-security-camera API",
    version
)]
struct Cli {
    /// Path to the blonk config file.
    #[arg(long, default_value = blonk::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Client-instance UUID to use (overrides the config file).
    #[arg(long)]
    uuid: Option<Uuid>,

    /// Blink account email (overrides the config file).
    #[arg(long)]
    email: Option<String>,

    /// Blink account password (overrides the config file).
    #[arg(long)]
    password: Option<String>,

    /// Verification pin. Prompted for interactively when the server
    /// requires one and the flag is omitted.
    #[arg(long)]
    pin: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and persist the issued credentials (the default).
    Login,
    /// End the server-side session and clear stored credentials.
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_or_init_config(&cli)?;

    match cli.command.as_ref().unwrap_or(&Command::Login) {
        Command::Login => run_login(&cli, &mut config).await,
        Command::Logout => run_logout(&cli, &mut config).await,
    }
}

/// Load the config record, seeding and saving a fresh identity on first
/// run. A `--uuid` flag takes precedence over a stored identity for this
/// run but is not written back over an existing record.
fn load_or_init_config(cli: &Cli) -> anyhow::Result<Config> {
    let loaded = Config::load(&cli.config)?;
    let existed = loaded.is_some();
    let mut config = loaded.unwrap_or_default();

    if let Some(uuid) = cli.uuid {
        config.uuid = uuid;
    }
    let mut dirty = !existed;
    if config.uuid.is_nil() {
        config.uuid = Uuid::new_v4();
        tracing::info!(uuid = %config.uuid, "generated new client identity");
        dirty = true;
    }
    if dirty {
        config.save(&cli.config)?;
    }
    Ok(config)
}

async fn run_login(cli: &Cli, config: &mut Config) -> anyhow::Result<()> {
    let email = cli
        .email
        .clone()
        .or_else(|| config.email.clone())
        .context("no email given; pass --email or add it to the config file")?;
    let password = cli
        .password
        .clone()
        .or_else(|| config.password.clone())
        .context("no password given; pass --password or add it to the config file")?;

    let mut session = Session::new(DEFAULT_HOST, config.uuid);
    tracing::info!(uuid = %session.uuid(), "session created");

    let transport = Transport::new()?;
    let request = api::login::login(&session, &email, &password)?;
    let reply: api::login::LoginReply = transport.send(&request).await?;

    if reply.lockout_time_remaining > 0 {
        bail!(
            "account locked out; retry in {} seconds",
            reply.lockout_time_remaining
        );
    }

    session.authed(
        reply.account.id,
        reply.client.id,
        reply.authtoken.authtoken.clone(),
    )?;

    if reply.verification_required() {
        tracing::info!("verification code required");
        let pin = match cli.pin.clone() {
            Some(pin) => pin,
            None => prompt_pin()?,
        };
        let request = api::verify::verify_pin(&session, &pin)?;
        let result: api::verify::VerifyPinReply = transport.send(&request).await?;
        if !result.valid {
            bail!(
                "pin verification failed ({}): {}",
                result.code,
                result.message
            );
        }
    }

    config.auth_token = Some(reply.authtoken.authtoken);
    config.account_id = Some(reply.account.id);
    config.client_id = Some(reply.client.id);
    config.save(&cli.config)?;
    tracing::info!("logged in");
    Ok(())
}

async fn run_logout(cli: &Cli, config: &mut Config) -> anyhow::Result<()> {
    let token = config
        .auth_token
        .clone()
        .context("not logged in; no auth token in config")?;
    let account_id = config
        .account_id
        .context("not logged in; no account id in config")?;
    let client_id = config
        .client_id
        .context("not logged in; no client id in config")?;

    let mut session = Session::new(DEFAULT_HOST, config.uuid);
    session.authed(account_id, client_id, token)?;

    let transport = Transport::new()?;
    let request = api::logout::logout(&session)?;
    let reply: api::logout::LogoutReply = transport.send(&request).await?;
    tracing::info!(message = %reply.message, "logged out");

    config.auth_token = None;
    config.account_id = None;
    config.client_id = None;
    config.save(&cli.config)?;
    session.close()?;
    Ok(())
}

fn prompt_pin() -> anyhow::Result<String> {
    let pin: String = dialoguer::Input::new()
        .with_prompt("Enter verification pin")
        .interact_text()?;
    Ok(pin)
}

// ── Tests ───────────────────────────────────────────────────────────
