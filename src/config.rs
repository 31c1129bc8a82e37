//! On-disk config record for the CLI.
//!
//! A small YAML file (default `.blonk.rc`) holding the client identity and,
//! once logged in, the credentials a later `logout` run needs. The record
//! can contain secrets, so it is written with owner/group-only permissions
//! on Unix. State is passed explicitly through the CLI flows; there are no
//! package-level globals.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".blonk.rc";

/// Persistent CLI state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Client-instance identity, generated and saved on first run.
    #[serde(default)]
    pub uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Auth token from the last successful login.
    #[serde(default, rename = "auth", skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
}

impl Config {
    /// Load the config from `path`. Returns `Ok(None)` when the file does
    /// not exist yet.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()))
            }
        };
        let config =
            serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    /// Write the config to `path`. The file may hold credentials, so
    /// permissions are restricted on Unix.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let raw = serde_yaml::to_string(self)?;
        std::fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o640))
                .with_context(|| format!("setting permissions on {}", path.display()))?;
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_none() {
        let tmp = TempDir::new().unwrap();
        let loaded = Config::load(&tmp.path().join("absent.rc")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_PATH);

        let config = Config {
            uuid: Uuid::new_v4(),
            email: Some("a@b.com".into()),
            password: None,
            auth_token: Some("opaque-token".into()),
            account_id: Some(1234),
            client_id: Some(5678),
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap().expect("config should exist");
        assert_eq!(loaded, config);
    }

    #[test]
    fn token_serializes_under_auth_key() {
        let config = Config {
            auth_token: Some("opaque-token".into()),
            ..Config::default()
        };
        let raw = serde_yaml::to_string(&config).unwrap();
        assert!(raw.contains("auth: opaque-token"));
        assert!(!raw.contains("email"));
    }

    #[test]
    fn fresh_record_has_nil_identity() {
        let config = Config::default();
        assert!(config.uuid.is_nil());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_not_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_PATH);
        Config::default().save(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
