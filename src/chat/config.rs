//! Startup configuration for the chat client.
//!
//! The client is configured entirely from the process environment:
//! `API_ID` and `API_HASH` identify the application to Telegram and are
//! required; `SESSION_NAME` names the on-disk session file and defaults to
//! `session`.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable holding the numeric application id.
pub const API_ID_VAR: &str = "API_ID";
/// Environment variable holding the application secret.
pub const API_HASH_VAR: &str = "API_HASH";
/// Environment variable naming the session file (optional).
pub const SESSION_NAME_VAR: &str = "SESSION_NAME";

const DEFAULT_SESSION_NAME: &str = "session";

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Application identifier issued by Telegram.
    pub api_id: i32,
    /// Application secret issued by Telegram.
    pub api_hash: String,
    /// Path of the session file, `<SESSION_NAME>.session`.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `API_ID` is missing, zero, or not
    /// an integer, or when `API_HASH` is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_parts(
            env::var(API_ID_VAR).ok(),
            env::var(API_HASH_VAR).ok(),
            env::var(SESSION_NAME_VAR).ok(),
        )
    }

    fn from_parts(
        api_id: Option<String>,
        api_hash: Option<String>,
        session_name: Option<String>,
    ) -> Result<Self> {
        let api_id = api_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::config("API_ID is not set"))?
            .parse::<i32>()
            .map_err(|_| Error::config("API_ID must be an integer"))?;
        if api_id == 0 {
            return Err(Error::config("API_ID must be non-zero"));
        }

        let api_hash = api_hash
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::config("API_HASH is not set"))?;

        let session_name = session_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string());

        Ok(Self {
            api_id,
            api_hash,
            session_file: PathBuf::from(format!("{session_name}.session")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(
        api_id: Option<&str>,
        api_hash: Option<&str>,
        session_name: Option<&str>,
    ) -> Result<ClientConfig> {
        ClientConfig::from_parts(
            api_id.map(String::from),
            api_hash.map(String::from),
            session_name.map(String::from),
        )
    }

    #[test]
    fn complete_configuration() {
        let config = parts(Some("12345"), Some("0123abcd"), Some("work")).unwrap();
        assert_eq!(config.api_id, 12345);
        assert_eq!(config.api_hash, "0123abcd");
        assert_eq!(config.session_file, PathBuf::from("work.session"));
    }

    #[test]
    fn session_name_defaults() {
        let config = parts(Some("12345"), Some("0123abcd"), None).unwrap();
        assert_eq!(config.session_file, PathBuf::from("session.session"));
    }

    #[test]
    fn missing_api_id_is_fatal() {
        let err = parts(None, Some("0123abcd"), None).unwrap_err();
        assert!(err.is_config());
        let err = parts(Some(""), Some("0123abcd"), None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn non_numeric_api_id_is_fatal() {
        let err = parts(Some("not-a-number"), Some("0123abcd"), None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn zero_api_id_is_fatal() {
        let err = parts(Some("0"), Some("0123abcd"), None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn missing_api_hash_is_fatal() {
        let err = parts(Some("12345"), None, None).unwrap_err();
        assert!(err.is_config());
        let err = parts(Some("12345"), Some("  "), None).unwrap_err();
        assert!(err.is_config());
    }
}
